//! Single-line text input shared by the login and table forms

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    /// Render as `*` (password field)
    pub masked: bool,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            masked: false,
        }
    }

    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Apply an editing key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Text as shown on screen
    pub fn shown(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let cursor = if focused { "_" } else { "" };

        let paragraph = Paragraph::new(Line::from(vec![Span::styled(
            format!("{}{}", self.shown(), cursor),
            Style::default()
                .fg(Color::White)
                .add_modifier(if focused { Modifier::BOLD } else { Modifier::empty() }),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::default();
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value, "a");
        assert!(!input.handle_key(key(KeyCode::Enter)));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new("users");
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(input.value.is_empty());
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut input = TextInput::default();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(input.value.is_empty());
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        input.value = "pässwd".to_string();
        assert_eq!(input.shown(), "******");
    }
}
