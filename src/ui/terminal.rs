//! Terminal prompt
//!
//! Runs the award dialogs modally on the alternate screen.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::dialog::{AwardDialog, DialogAction, EncounterDialog, ModalDialog};
use crate::award::{AwardChoice, AwardPrompt, AwardRequest, EncounterRequest};

/// Restores the terminal when dropped, including on error paths
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Show `dialog` until it is submitted (`true`) or cancelled (`false`)
fn run_modal(dialog: &mut dyn ModalDialog) -> Result<bool> {
    let mut guard = TerminalGuard::enter()?;

    loop {
        guard.terminal.draw(|frame| dialog.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match dialog.handle_key(key) {
                DialogAction::Continue => {}
                DialogAction::Submit => return Ok(true),
                DialogAction::Cancel => return Ok(false),
            }
        }
    }
}

/// Interactive prompt on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl AwardPrompt for TerminalPrompt {
    fn choose_award(&mut self, request: &AwardRequest<'_>) -> Result<Option<AwardChoice>> {
        let mut dialog = AwardDialog::new(request);
        if run_modal(&mut dialog)? {
            Ok(dialog.choice())
        } else {
            Ok(None)
        }
    }

    fn confirm_encounter(&mut self, request: &EncounterRequest) -> Result<Option<String>> {
        let mut dialog = EncounterDialog::new(request);
        if run_modal(&mut dialog)? {
            Ok(Some(dialog.input().to_string()))
        } else {
            Ok(None)
        }
    }
}
