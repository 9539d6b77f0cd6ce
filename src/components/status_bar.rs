//! Screen tabs, status line and help bar

use crate::model::AppMode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Everything the status line shows, borrowed from App
pub struct StatusContext<'a> {
    pub server: &'a str,
    pub login_pending: bool,
    pub query_pending: bool,
    pub last_loaded: Option<&'a str>,
    pub page_summary: Option<String>,
    pub has_token: bool,
    pub error: Option<&'a str>,
}

pub fn render_tabs(frame: &mut Frame, area: Rect, mode: AppMode) {
    let all = [AppMode::Login, AppMode::Browse];
    let titles: Vec<&str> = all.iter().map(|m| m.name()).collect();
    let selected = all.iter().position(|m| *m == mode).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

pub fn status_spans(ctx: &StatusContext) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.server),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if ctx.login_pending || ctx.query_pending {
        spans.push(Span::styled(
            " waiting for server ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(summary) = &ctx.page_summary {
        spans.push(Span::styled(
            summary.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(loaded) = ctx.last_loaded {
        spans.push(Span::styled(
            format!("loaded {} ", loaded),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled(
        if ctx.has_token { "token ✓" } else { "no token" },
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    spans
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &StatusContext) {
    frame.render_widget(Paragraph::new(Line::from(status_spans(ctx))), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, mode: AppMode) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        key("Esc", Color::Yellow),
        Span::raw("Quit "),
        key("F1", Color::White),
        Span::raw("Help "),
        key("F2", Color::Magenta),
        Span::raw("Switch "),
        key("Tab", Color::Cyan),
        Span::raw("Field "),
    ];
    match mode {
        AppMode::Login => {
            spans.push(key("Enter", Color::Green));
            spans.push(Span::raw("Sign in"));
        }
        AppMode::Browse => {
            spans.push(key("Enter", Color::Green));
            spans.push(Span::raw("Load/Go "));
            spans.push(key("PgUp/PgDn", Color::Cyan));
            spans.push(Span::raw("Page "));
            spans.push(key("^T", Color::Cyan));
            spans.push(Span::raw("Toggle"));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
