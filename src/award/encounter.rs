//! Automatic award when an encounter ends
//!
//! The host reports the encounter's computed XP and the characters that took
//! part. The game master confirms (or edits) the amount before it is applied.

use std::collections::HashSet;

use super::host::{parse_number_field, truncate_xp, EncounterRequest, Session};
use super::report::{AwardReport, AwardSource};
use super::{apply_to_all, post_report, AwardError, AwardHost, AwardOutcome, SkipReason};
use crate::actors::{ActorId, ActorRecord};
use crate::data::AwardConfig;

/// Award data computed by the host for a finished encounter
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterAward {
    /// Suggested XP per character
    pub xp: f64,
    pub recipients: Vec<ActorId>,
}

/// Event raised when an encounter is over
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterEnded {
    /// `None` when the host computed no award for the encounter
    pub award: Option<EncounterAward>,
}

/// Handle the end of an encounter: confirm the award and apply it.
pub fn on_encounter_ended(
    host: &mut AwardHost<'_>,
    config: &AwardConfig,
    session: Session,
    event: &EncounterEnded,
) -> Result<AwardOutcome, AwardError> {
    if !session.may_award() {
        return Ok(AwardOutcome::Skipped(SkipReason::NotGameMaster));
    }

    // Each character is awarded once, however often the host lists it
    let mut seen = HashSet::new();
    let recipients: Vec<ActorRecord> = event
        .award
        .iter()
        .flat_map(|award| award.recipients.iter())
        .filter(|id| seen.insert(*id))
        .filter_map(|id| host.store.actor(id))
        .filter(|a| a.is_character())
        .collect();
    let Some(award) = event.award.as_ref().filter(|_| !recipients.is_empty()) else {
        host.notifier.warn("No characters to award XP to for this encounter.");
        return Ok(AwardOutcome::Skipped(SkipReason::NoRecipients));
    };

    let default_xp = match truncate_xp(award.xp) {
        Some(xp) if xp != 0 => xp,
        _ => {
            host.notifier.info("No XP to award for this encounter.");
            return Ok(AwardOutcome::Skipped(SkipReason::ZeroXp));
        }
    };

    let request = EncounterRequest {
        default_xp,
        recipients: recipients.len(),
    };
    let input = host
        .prompt
        .confirm_encounter(&request)
        .map_err(|e| AwardError::Prompt(format!("{:#}", e)))?;
    let Some(input) = input else {
        log::info!("Encounter award declined");
        return Ok(AwardOutcome::Cancelled);
    };

    // Blank, zero or unreadable input keeps the suggested amount
    let entered = parse_number_field(&input);
    let xp = if entered.is_nan() || entered == 0.0 {
        Some(default_xp)
    } else {
        truncate_xp(entered)
    };
    let Some(xp) = xp else {
        host.notifier.warn("Invalid XP value.");
        return Ok(AwardOutcome::Skipped(SkipReason::InvalidXp));
    };
    if xp == 0 {
        host.notifier.info("0 XP awarded – no changes.");
        return Ok(AwardOutcome::Skipped(SkipReason::ZeroXp));
    }

    let entries = apply_to_all(host.store, &recipients, xp)?;
    let report = AwardReport {
        party: None,
        source: AwardSource::Encounter,
        xp,
        entries,
    };

    post_report(host.transcript, &report.chat_message(&config.speaker, config.level_up_note));

    log::info!(
        "Encounter award: {} XP to {} characters ({} level-ups)",
        xp, report.recipients(), report.level_ups().count()
    );
    host.notifier.info(&format!(
        "Awarded {} XP to {} characters",
        xp, report.recipients()
    ));

    Ok(AwardOutcome::Awarded(report))
}
