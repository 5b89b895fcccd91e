//! Scripted prompt
//!
//! Answers prompts with fixed values, for command-line flags and tests.

use anyhow::Result;

use crate::actors::ActorId;
use crate::award::{AwardChoice, AwardPrompt, AwardRequest, EncounterRequest};

/// Prompt with predetermined answers. A missing answer means "cancel".
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    award: Option<AwardChoice>,
    encounter: Option<String>,
    shown: usize,
    last_encounter: Option<EncounterRequest>,
}

impl ScriptedPrompt {
    /// Select `party_id` with the given preset and custom text
    pub fn award(party_id: ActorId, preset_key: &str, custom: &str) -> Self {
        Self {
            award: Some(AwardChoice {
                party_id,
                preset_key: preset_key.to_string(),
                custom: custom.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Confirm encounter awards with `input` in the XP field
    pub fn confirm(input: &str) -> Self {
        Self {
            encounter: Some(input.to_string()),
            ..Self::default()
        }
    }

    /// Cancel every prompt
    pub fn cancel() -> Self {
        Self::default()
    }

    /// How many prompts were shown
    pub fn prompts_shown(&self) -> usize {
        self.shown
    }

    pub fn last_encounter_request(&self) -> Option<&EncounterRequest> {
        self.last_encounter.as_ref()
    }
}

impl AwardPrompt for ScriptedPrompt {
    fn choose_award(&mut self, request: &AwardRequest<'_>) -> Result<Option<AwardChoice>> {
        self.shown += 1;
        log::debug!("Scripted award prompt ({} parties offered)", request.parties.len());
        Ok(self.award.clone())
    }

    fn confirm_encounter(&mut self, request: &EncounterRequest) -> Result<Option<String>> {
        self.shown += 1;
        self.last_encounter = Some(request.clone());
        Ok(self.encounter.clone())
    }
}
