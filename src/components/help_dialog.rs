//! Help dialog component
//!
//! Lists every key binding of both screens.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Anywhere");
    add_shortcut(&mut lines, "F1", "Show this help");
    add_shortcut(&mut lines, "F2", "Switch between Login and Tables");
    add_shortcut(&mut lines, "Esc", "Quit (with confirmation)");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");
    add_shortcut(&mut lines, "Tab / S-Tab", "Next / previous field");
    add_shortcut(&mut lines, "Ctrl+u", "Clear the focused field");

    add_section(&mut lines, "Login");
    add_shortcut(&mut lines, "Enter", "Next field, submit on password");
    add_shortcut(&mut lines, "PgUp / PgDn", "Scroll the server reply");

    add_section(&mut lines, "Tables");
    add_shortcut(&mut lines, "Enter", "Load table (page field: go to page)");
    add_shortcut(&mut lines, "PgDn / Ctrl+n", "Next page");
    add_shortcut(&mut lines, "PgUp / Ctrl+p", "Previous page");
    add_shortcut(&mut lines, "Ctrl+t", "Show / hide table content");

    add_section(&mut lines, "Rows (focus the grid with Tab)");
    add_shortcut(&mut lines, "h j k l / ←↓↑→", "Move between cells");
    add_shortcut(&mut lines, "Enter", "Edit cell (local only, never saved)");
    add_shortcut(&mut lines, "n / p", "Next / previous page");
    add_shortcut(&mut lines, "t", "Show / hide table content");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
