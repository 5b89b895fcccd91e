//! Award summaries and chat cards

use super::host::ChatMessage;
use super::ledger::AwardEntry;

/// Where the per-character amount came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardSource {
    /// Quick-pick preset, by label
    Preset(String),
    /// Custom value typed into the dialog
    Custom(i64),
    /// Confirmed at the end of an encounter
    Encounter,
}

/// Result of a completed award
#[derive(Debug, Clone, PartialEq)]
pub struct AwardReport {
    /// Target party, when the award went to a party
    pub party: Option<String>,
    pub source: AwardSource,
    /// XP given to each character
    pub xp: i64,
    pub entries: Vec<AwardEntry>,
}

impl AwardReport {
    pub fn recipients(&self) -> usize {
        self.entries.len()
    }

    /// Characters that gained at least one level
    pub fn level_ups(&self) -> impl Iterator<Item = &AwardEntry> {
        self.entries.iter().filter(|e| e.levels_gained() > 0)
    }

    /// Render the chat card text
    pub fn chat_card(&self, level_up_note: bool) -> String {
        let mut lines = Vec::new();

        match &self.party {
            Some(name) => lines.push(format!("XP award to party: {}", name)),
            None => lines.push("XP award for encounter".to_string()),
        }

        match &self.source {
            AwardSource::Preset(label) => lines.push(format!("Preset: {}", label)),
            AwardSource::Custom(xp) => lines.push(format!("Custom value: {} XP", xp)),
            AwardSource::Encounter => lines.push(format!("Encounter award: {} XP", self.xp)),
        }

        lines.push(format!("Members: {}", self.recipients()));

        for entry in &self.entries {
            let mut line = format!("- {}: {} XP", entry.name, signed(entry.xp));
            if entry.levels_gained() > 0 {
                line.push_str(&format!(" (level {} → {})", entry.before.level, entry.after.level));
            }
            lines.push(line);
        }

        if level_up_note {
            lines.push(
                "Level-ups from 1000-XP steps are booked on the character level automatically. \
                 Update class features on the sheet as usual."
                    .to_string(),
            );
        }

        lines.join("\n")
    }

    pub fn chat_message(&self, speaker: &str, level_up_note: bool) -> ChatMessage {
        ChatMessage {
            speaker: speaker.to_string(),
            content: self.chat_card(level_up_note),
        }
    }
}

fn signed(xp: i64) -> String {
    if xp > 0 {
        format!("+{}", xp)
    } else {
        xp.to_string()
    }
}
