//! User Interface module
//!
//! Award dialogs on the terminal using ratatui, plus console notices and a
//! scripted prompt for non-interactive runs.

pub mod dialog;
pub mod terminal;
pub mod console;
pub mod scripted;

pub use dialog::{AwardDialog, DialogAction, EncounterDialog, ModalDialog};
pub use terminal::TerminalPrompt;
pub use console::ConsoleNotifier;
pub use scripted::ScriptedPrompt;
