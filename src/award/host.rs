//! Host services consumed by the award flows
//!
//! Prompting, user notices and the chat transcript are provided by whoever
//! embeds the flows (the terminal UI, a script, or a test double).

use crate::actors::ActorId;
use crate::progression::XpPreset;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

impl NoticeLevel {
    pub fn name(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warn => "warn",
            NoticeLevel::Error => "error",
        }
    }
}

/// Sink for user-facing notices
pub trait Notifier {
    fn notify(&mut self, level: NoticeLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.notify(NoticeLevel::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// A message posted to the chat transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Speaker alias shown with the message
    pub speaker: String,
    pub content: String,
}

/// Chat log sink recording award events
pub trait Transcript {
    fn post(&mut self, message: &ChatMessage) -> anyhow::Result<()>;
}

/// Party offered in the award dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyOption {
    pub id: ActorId,
    pub name: String,
}

/// What the award dialog needs to render
#[derive(Debug, Clone)]
pub struct AwardRequest<'a> {
    pub parties: Vec<PartyOption>,
    pub presets: &'a [XpPreset],
}

/// The user's selection in the award dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardChoice {
    pub party_id: ActorId,
    pub preset_key: String,
    /// Raw text of the custom XP field; blank means "use the preset"
    pub custom: String,
}

/// What the encounter confirmation needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterRequest {
    /// Suggested per-character XP
    pub default_xp: i64,
    /// Number of characters that will receive it
    pub recipients: usize,
}

/// Modal prompts. `Ok(None)` means the user cancelled.
pub trait AwardPrompt {
    fn choose_award(&mut self, request: &AwardRequest<'_>) -> anyhow::Result<Option<AwardChoice>>;

    /// Returns the raw text of the XP field on confirmation
    fn confirm_encounter(&mut self, request: &EncounterRequest) -> anyhow::Result<Option<String>>;
}

/// Game session state relevant to automatic awards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// The host has finished loading
    pub ready: bool,
    /// Current user is the game master
    pub is_gm: bool,
}

impl Session {
    pub fn game_master() -> Self {
        Self { ready: true, is_gm: true }
    }

    pub fn may_award(&self) -> bool {
        self.ready && self.is_gm
    }
}

/// Parse a number field the way an HTML number input reads back.
///
/// Blank input reads as 0. Anything unparsable is NaN.
pub fn parse_number_field(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Truncate toward zero into an XP amount, if it fits
pub fn truncate_xp(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_field() {
        assert_eq!(parse_number_field(""), 0.0);
        assert_eq!(parse_number_field("   "), 0.0);
        assert_eq!(parse_number_field(" 45 "), 45.0);
        assert_eq!(parse_number_field("-20"), -20.0);
        assert_eq!(parse_number_field("12.9"), 12.9);
        assert!(parse_number_field("lots").is_nan());
    }

    #[test]
    fn test_truncate_xp() {
        assert_eq!(truncate_xp(12.9), Some(12));
        assert_eq!(truncate_xp(-7.5), Some(-7));
        assert_eq!(truncate_xp(0.4), Some(0));
        assert_eq!(truncate_xp(f64::NAN), None);
        assert_eq!(truncate_xp(f64::INFINITY), None);
        assert_eq!(truncate_xp(1e300), None);
    }

    #[test]
    fn test_session() {
        assert!(Session::game_master().may_award());
        assert!(!Session { ready: true, is_gm: false }.may_award());
        assert!(!Session { ready: false, is_gm: true }.may_award());
    }
}
