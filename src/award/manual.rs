//! Party award through the dropdown dialog

use super::host::{parse_number_field, truncate_xp, AwardChoice, AwardRequest, PartyOption};
use super::report::{AwardReport, AwardSource};
use super::{apply_to_all, post_report, AwardError, AwardHost, AwardOutcome, SkipReason};
use crate::actors::resolve_members;
use crate::data::AwardConfig;
use crate::progression::find_preset;

/// Ask for a party and an amount, then award it to every member.
///
/// Stops with a notice when there is nothing sensible to award, and silently
/// when the user cancels. A failed write halts the batch with an error.
pub fn award_party(host: &mut AwardHost<'_>, config: &AwardConfig) -> Result<AwardOutcome, AwardError> {
    let parties = host.store.parties();
    if parties.is_empty() {
        host.notifier.warn(
            "No party actor found. Create an actor of type \"Party\" and add members first.",
        );
        return Ok(AwardOutcome::Skipped(SkipReason::NoParties));
    }

    let request = AwardRequest {
        parties: parties
            .iter()
            .map(|p| PartyOption { id: p.id.clone(), name: p.name.clone() })
            .collect(),
        presets: &config.presets,
    };

    let choice = host
        .prompt
        .choose_award(&request)
        .map_err(|e| AwardError::Prompt(format!("{:#}", e)))?;
    let Some(AwardChoice { party_id, preset_key, custom }) = choice else {
        log::info!("Party award cancelled");
        return Ok(AwardOutcome::Cancelled);
    };

    let Some(party) = host.store.party(&party_id) else {
        host.notifier.error("Selected party not found.");
        return Ok(AwardOutcome::Skipped(SkipReason::PartyNotFound(party_id)));
    };

    let members = resolve_members(&*host.store, &party);
    if members.is_empty() {
        host.notifier
            .warn(&format!("The party \"{}\" has no members (characters).", party.name));
        return Ok(AwardOutcome::Skipped(SkipReason::NoMembers(party.name)));
    }

    // A positive custom entry wins over the preset
    let custom = parse_number_field(&custom);
    let preset = find_preset(&config.presets, &preset_key);
    let (xp, source) = if custom.is_finite() && custom > 0.0 {
        let xp = truncate_xp(custom);
        (xp, xp.map(AwardSource::Custom))
    } else {
        let xp = preset.map(|p| p.value);
        (xp, preset.map(|p| AwardSource::Preset(p.label.clone())))
    };

    let (Some(xp), Some(source)) = (xp, source) else {
        host.notifier.warn("Invalid XP value.");
        return Ok(AwardOutcome::Skipped(SkipReason::InvalidXp));
    };
    if xp == 0 {
        host.notifier.info("0 XP awarded – no changes.");
        return Ok(AwardOutcome::Skipped(SkipReason::ZeroXp));
    }

    let entries = apply_to_all(host.store, &members, xp)?;
    let report = AwardReport {
        party: Some(party.name.clone()),
        source,
        xp,
        entries,
    };

    post_report(host.transcript, &report.chat_message(&config.speaker, config.level_up_note));

    log::info!(
        "Awarded {} XP to party {} ({} members, {} level-ups)",
        xp, party.name, report.recipients(), report.level_ups().count()
    );
    host.notifier.info(&format!(
        "Awarded {} XP per character to party \"{}\" ({} members)",
        xp, party.name, report.recipients()
    ));

    Ok(AwardOutcome::Awarded(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::ActorId;
    use crate::award::host::NoticeLevel;
    use crate::award::test_support::*;
    use crate::progression::Progress;
    use crate::ui::ScriptedPrompt;

    fn table(prompt: ScriptedPrompt) -> Fixture {
        Fixture::new(
            vec![
                character("valeros", 3, 950),
                character("kyra", 2, 100),
                character("seoni", 5, 500),
                party("p1", "Heroes", &["valeros", "kyra"]),
                party("p2", "Empty Table", &[]),
            ],
            prompt,
        )
    }

    fn award(fx: &mut Fixture) -> Result<AwardOutcome, AwardError> {
        fx.run(|host| award_party(host, &AwardConfig::default()))
    }

    fn choice(party: &str, preset: &str, custom: &str) -> ScriptedPrompt {
        ScriptedPrompt::award(ActorId::new(party), preset, custom)
    }

    #[test]
    fn test_preset_award() {
        let mut fx = table(choice("p1", "severe", ""));
        let outcome = award(&mut fx).unwrap();

        let AwardOutcome::Awarded(report) = outcome else { panic!("expected award") };
        assert_eq!(report.xp, 120);
        assert_eq!(report.source, AwardSource::Preset("Severe – 120 XP".to_string()));
        assert_eq!(fx.progress("valeros"), Progress::new(4, 70));
        assert_eq!(fx.progress("kyra"), Progress::new(2, 220));
        assert_eq!(fx.progress("seoni"), Progress::new(5, 500));
        assert_eq!(fx.world.writes.len(), 2);

        assert_eq!(fx.transcript.messages.len(), 1);
        assert_eq!(fx.transcript.messages[0].speaker, "Game Master");
        assert!(fx.transcript.messages[0].content.contains("- Valeros: +120 XP (level 3 → 4)"));
        assert_eq!(
            fx.notifier.notices,
            vec![(
                NoticeLevel::Info,
                "Awarded 120 XP per character to party \"Heroes\" (2 members)".to_string()
            )]
        );
    }

    #[test]
    fn test_custom_value_overrides_preset() {
        let mut fx = table(choice("p1", "trivial", "2050.7"));
        let AwardOutcome::Awarded(report) = award(&mut fx).unwrap() else { panic!("expected award") };
        assert_eq!(report.xp, 2050);
        assert_eq!(report.source, AwardSource::Custom(2050));
        assert_eq!(fx.progress("valeros"), Progress::new(6, 0));
    }

    #[test]
    fn test_non_positive_custom_falls_back_to_preset() {
        for custom in ["", "0", "-30", "abc"] {
            let mut fx = table(choice("p1", "low", custom));
            let AwardOutcome::Awarded(report) = award(&mut fx).unwrap() else {
                panic!("expected award for custom {:?}", custom)
            };
            assert_eq!(report.xp, 60, "custom {:?}", custom);
        }
    }

    #[test]
    fn test_unknown_preset_uses_first() {
        let mut fx = table(choice("p1", "deadly", ""));
        let AwardOutcome::Awarded(report) = award(&mut fx).unwrap() else { panic!("expected award") };
        assert_eq!(report.xp, 30);
    }

    #[test]
    fn test_zero_xp_writes_nothing_and_notifies_once() {
        // 0.5 is positive, so it beats the preset, then truncates to zero
        let mut fx = table(choice("p1", "low", "0.5"));
        let outcome = award(&mut fx).unwrap();
        assert_eq!(outcome, AwardOutcome::Skipped(SkipReason::ZeroXp));
        assert!(fx.world.writes.is_empty());
        assert!(fx.transcript.messages.is_empty());
        assert_eq!(
            fx.notifier.notices,
            vec![(NoticeLevel::Info, "0 XP awarded – no changes.".to_string())]
        );
    }

    #[test]
    fn test_unrepresentable_custom_is_invalid() {
        let mut fx = table(choice("p1", "low", "1e300"));
        assert_eq!(award(&mut fx).unwrap(), AwardOutcome::Skipped(SkipReason::InvalidXp));
        assert!(fx.world.writes.is_empty());
        assert_eq!(fx.notifier.notices[0].0, NoticeLevel::Warn);
    }

    #[test]
    fn test_cancel_is_silent() {
        let mut fx = table(ScriptedPrompt::cancel());
        assert_eq!(award(&mut fx).unwrap(), AwardOutcome::Cancelled);
        assert!(fx.notifier.notices.is_empty());
        assert!(fx.world.writes.is_empty());
    }

    #[test]
    fn test_no_parties_warns() {
        let mut fx = table(choice("p1", "low", ""));
        fx.world = recording_world(vec![character("valeros", 1, 0)]);
        assert_eq!(award(&mut fx).unwrap(), AwardOutcome::Skipped(SkipReason::NoParties));
        assert_eq!(fx.notifier.notices[0].0, NoticeLevel::Warn);
        assert_eq!(fx.prompt.prompts_shown(), 0);
    }

    #[test]
    fn test_missing_party_is_error() {
        let mut fx = table(choice("gone", "low", ""));
        assert_eq!(
            award(&mut fx).unwrap(),
            AwardOutcome::Skipped(SkipReason::PartyNotFound(ActorId::new("gone")))
        );
        assert_eq!(fx.notifier.notices[0].0, NoticeLevel::Error);
    }

    #[test]
    fn test_empty_party_warns() {
        let mut fx = table(choice("p2", "low", ""));
        assert_eq!(
            award(&mut fx).unwrap(),
            AwardOutcome::Skipped(SkipReason::NoMembers("Empty Table".to_string()))
        );
        assert_eq!(
            fx.notifier.notices,
            vec![(
                NoticeLevel::Warn,
                "The party \"Empty Table\" has no members (characters).".to_string()
            )]
        );
    }

    #[test]
    fn test_write_failure_halts_batch_without_rollback() {
        let mut fx = table(choice("p1", "moderate", ""));
        fx.world.fail_on = Some(ActorId::new("kyra"));

        let err = award(&mut fx).unwrap_err();
        assert!(matches!(err, AwardError::Store(_)));
        // Valeros was written before the failure and keeps the award
        assert_eq!(fx.progress("valeros"), Progress::new(4, 30));
        assert_eq!(fx.progress("kyra"), Progress::new(2, 100));
        assert!(fx.transcript.messages.is_empty());
        assert!(fx.notifier.notices.is_empty());
    }

    #[test]
    fn test_transcript_failure_keeps_award() {
        let mut fx = table(choice("p1", "low", ""));
        fx.transcript.fail = true;
        assert!(award(&mut fx).unwrap().is_awarded());
        assert_eq!(fx.progress("kyra"), Progress::new(2, 160));
    }
}
