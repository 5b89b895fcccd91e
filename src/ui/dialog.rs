//! Award dialogs
//!
//! Dialog state, key handling and rendering. Terminal setup lives in
//! [`super::terminal`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::award::{AwardChoice, AwardRequest, EncounterRequest, PartyOption};
use crate::progression::XpPreset;

/// What the dialog wants after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Continue,
    Submit,
    Cancel,
}

/// A dialog that can run modally in the terminal
pub trait ModalDialog {
    fn handle_key(&mut self, key: KeyEvent) -> DialogAction;
    fn render(&self, frame: &mut Frame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Party,
    Preset,
    Custom,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Party => Field::Preset,
            Field::Preset => Field::Custom,
            Field::Custom => Field::Party,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Party => Field::Custom,
            Field::Preset => Field::Party,
            Field::Custom => Field::Preset,
        }
    }
}

/// Party award dropdown dialog
pub struct AwardDialog {
    parties: Vec<PartyOption>,
    presets: Vec<XpPreset>,
    focus: Field,
    party_cursor: usize,
    preset_cursor: usize,
    /// Custom XP text as typed
    custom: String,
}

impl AwardDialog {
    pub fn new(request: &AwardRequest<'_>) -> Self {
        Self {
            parties: request.parties.clone(),
            presets: request.presets.to_vec(),
            focus: Field::Party,
            party_cursor: 0,
            preset_cursor: 0,
            custom: String::new(),
        }
    }

    /// Current selection, if there is a party to select
    pub fn choice(&self) -> Option<AwardChoice> {
        let party = self.parties.get(self.party_cursor)?;
        Some(AwardChoice {
            party_id: party.id.clone(),
            preset_key: self
                .presets
                .get(self.preset_cursor)
                .map(|p| p.key.clone())
                .unwrap_or_default(),
            custom: self.custom.clone(),
        })
    }

    fn move_cursor(&mut self, down: bool) {
        let (cursor, len) = match self.focus {
            Field::Party => (&mut self.party_cursor, self.parties.len()),
            Field::Preset => (&mut self.preset_cursor, self.presets.len()),
            Field::Custom => return,
        };
        if len == 0 {
            return;
        }
        *cursor = if down {
            (*cursor + 1) % len
        } else if *cursor == 0 {
            len - 1
        } else {
            *cursor - 1
        };
    }

    fn field_style(&self, field: Field) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn option_lines<'a>(&self, field: Field, labels: impl Iterator<Item = &'a str>, cursor: usize) -> Vec<Line<'a>> {
        labels
            .enumerate()
            .map(|(i, label)| {
                let is_selected = i == cursor;
                let prefix = if is_selected { "► " } else { "  " };
                let style = if is_selected && self.focus == field {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(vec![Span::styled(prefix, style), Span::styled(label, style)])
            })
            .collect()
    }
}

impl ModalDialog for AwardDialog {
    fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        match key.code {
            KeyCode::Esc => return DialogAction::Cancel,
            KeyCode::Enter => return DialogAction::Submit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return DialogAction::Cancel
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.move_cursor(false),
            KeyCode::Down => self.move_cursor(true),
            KeyCode::Char(c) if self.focus == Field::Custom => {
                if c.is_ascii_digit() || c == '-' || c == '.' {
                    self.custom.push(c);
                }
            }
            KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Backspace if self.focus == Field::Custom => {
                self.custom.pop();
            }
            _ => {}
        }
        DialogAction::Continue
    }

    fn render(&self, frame: &mut Frame) {
        let popup_area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Award XP to Party ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let party_height = self.parties.len() as u16 + 2;
        let preset_height = self.presets.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(party_height),
                Constraint::Length(preset_height),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        let parties = self.option_lines(
            Field::Party,
            self.parties.iter().map(|p| p.name.as_str()),
            self.party_cursor,
        );
        frame.render_widget(
            Paragraph::new(parties).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Target party ")
                    .border_style(self.field_style(Field::Party)),
            ),
            chunks[0],
        );

        let presets = self.option_lines(
            Field::Preset,
            self.presets.iter().map(|p| p.label.as_str()),
            self.preset_cursor,
        );
        frame.render_widget(
            Paragraph::new(presets).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Preset (per character) ")
                    .border_style(self.field_style(Field::Preset)),
            ),
            chunks[1],
        );

        let custom = if self.custom.is_empty() && self.focus != Field::Custom {
            Span::styled("e.g. 45", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(format!("{}▏", self.custom), Style::default().fg(Color::White))
        };
        frame.render_widget(
            Paragraph::new(Line::from(custom)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Custom XP (overrides preset when > 0) ")
                    .border_style(self.field_style(Field::Custom)),
            ),
            chunks[2],
        );

        let help = Paragraph::new(Line::from(Span::styled(
            "[Tab] Field  [↑↓] Select  [Enter] Award  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}

/// Encounter-end confirmation
pub struct EncounterDialog {
    request: EncounterRequest,
    input: String,
}

impl EncounterDialog {
    pub fn new(request: &EncounterRequest) -> Self {
        Self {
            request: request.clone(),
            input: request.default_xp.to_string(),
        }
    }

    /// XP field text as typed
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl ModalDialog for EncounterDialog {
    fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => DialogAction::Submit,
            KeyCode::Esc | KeyCode::Char('n') => DialogAction::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => DialogAction::Cancel,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                self.input.push(c);
                DialogAction::Continue
            }
            KeyCode::Backspace => {
                self.input.pop();
                DialogAction::Continue
            }
            _ => DialogAction::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let popup_area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Award Encounter XP ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Award {} XP to {} characters for this encounter?",
                    self.request.default_xp, self.request.recipients
                ),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("XP: ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{}▏", self.input), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter/y] Yes  [Esc/n] No",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::ActorId;
    use crate::progression::default_presets;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> AwardDialog {
        let presets = default_presets();
        let request = AwardRequest {
            parties: vec![
                PartyOption { id: ActorId::new("p1"), name: "Heroes".to_string() },
                PartyOption { id: ActorId::new("p2"), name: "Villains".to_string() },
            ],
            presets: &presets,
        };
        AwardDialog::new(&request)
    }

    #[test]
    fn test_default_choice() {
        let choice = dialog().choice().unwrap();
        assert_eq!(choice.party_id, ActorId::new("p1"));
        assert_eq!(choice.preset_key, "trivial");
        assert_eq!(choice.custom, "");
    }

    #[test]
    fn test_navigation_and_custom_entry() {
        let mut d = dialog();
        d.handle_key(key(KeyCode::Up)); // wraps to last party
        d.handle_key(key(KeyCode::Tab));
        d.handle_key(key(KeyCode::Down));
        d.handle_key(key(KeyCode::Down));
        d.handle_key(key(KeyCode::Tab));
        for c in "4x5".chars() {
            d.handle_key(key(KeyCode::Char(c)));
        }
        d.handle_key(key(KeyCode::Char('0')));
        d.handle_key(key(KeyCode::Backspace));

        assert_eq!(d.handle_key(key(KeyCode::Enter)), DialogAction::Submit);
        let choice = d.choice().unwrap();
        assert_eq!(choice.party_id, ActorId::new("p2"));
        assert_eq!(choice.preset_key, "moderate");
        assert_eq!(choice.custom, "45");
    }

    #[test]
    fn test_escape_cancels() {
        assert_eq!(dialog().handle_key(key(KeyCode::Esc)), DialogAction::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(dialog().handle_key(ctrl_c), DialogAction::Cancel);
    }

    #[test]
    fn test_award_dialog_renders_options() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let d = dialog();
        terminal.draw(|frame| d.render(frame)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Heroes"));
        assert!(screen.contains("Villains"));
        assert!(screen.contains("Moderate"));
    }

    #[test]
    fn test_encounter_dialog_editing() {
        let request = EncounterRequest { default_xp: 80, recipients: 4 };
        let mut d = EncounterDialog::new(&request);
        assert_eq!(d.input(), "80");

        d.handle_key(key(KeyCode::Backspace));
        d.handle_key(key(KeyCode::Backspace));
        d.handle_key(key(KeyCode::Char('1')));
        d.handle_key(key(KeyCode::Char('2')));
        assert_eq!(d.input(), "12");
        assert_eq!(d.handle_key(key(KeyCode::Char('y'))), DialogAction::Submit);
        assert_eq!(d.handle_key(key(KeyCode::Char('n'))), DialogAction::Cancel);
    }
}
