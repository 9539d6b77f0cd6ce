//! Login screen
//!
//! Username and password inputs; Enter on the password field submits.
//! The server's reply is shown verbatim (minus terminal escapes) below
//! the form.

use crate::action::Action;
use crate::component::Component;
use crate::components::input::TextInput;
use crate::components::layout::{form_columns, split_form};
use crate::model::LoginField;
use crate::services::LoginRequest;
use crate::text::sanitize;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct LoginComponent {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    /// Reply body of the last successful submission
    pub reply: Option<String>,
    /// A login request is in flight
    pub pending: bool,
    scroll: u16,
}

impl Default for LoginComponent {
    fn default() -> Self {
        Self::new("")
    }
}

impl LoginComponent {
    pub fn new(last_username: &str) -> Self {
        let focus = if last_username.is_empty() {
            LoginField::Username
        } else {
            LoginField::Password
        };
        Self {
            username: TextInput::new(last_username),
            password: TextInput::masked(),
            focus,
            reply: None,
            pending: false,
            scroll: 0,
        }
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest::new(&self.username.value, &self.password.value)
    }

    /// Put the server's reply into the content area
    pub fn set_reply(&mut self, body: &str) {
        self.reply = Some(sanitize(body));
        self.scroll = 0;
        self.pending = false;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Enter => match self.focus {
                LoginField::Username => {
                    self.focus = LoginField::Password;
                    None
                }
                LoginField::Password => Some(Action::SubmitLogin),
            },
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            _ => {
                self.focused_input().handle_key(key);
                None
            }
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (form, body) = split_form(area, 3);
        let columns = form_columns(form, 2);

        self.username
            .draw(frame, columns[0], "Username", self.focus == LoginField::Username);
        self.password
            .draw(frame, columns[1], "Password", self.focus == LoginField::Password);

        let lines: Vec<Line> = match (&self.reply, self.pending) {
            (_, true) => vec![Line::from(Span::styled(
                "  Signing in...",
                Style::default().fg(Color::Yellow),
            ))],
            (Some(reply), false) => reply.lines().map(|l| Line::from(l.to_string())).collect(),
            (None, false) => vec![Line::from(Span::styled(
                "  Enter credentials and press Enter on the password field",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Content ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, body);

        Ok(())
    }
}
