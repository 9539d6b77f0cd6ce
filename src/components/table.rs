//! Result table rendering
//!
//! Turns the rendered page into styled lines: an index column showing the
//! 1-based global row number, then one column per field.

use crate::model::Page;
use crate::text::{display_width, pad};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Widest a column may grow before cells are truncated
const MAX_COLUMN_WIDTH: usize = 40;

/// Position of the highlighted cell within the current page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCursor {
    pub row: usize,
    pub col: usize,
}

fn column_widths(headers: Option<&[String]>, page: &Page) -> Vec<usize> {
    let columns = headers.map_or(0, <[String]>::len).max(page.column_count());
    let mut widths = vec![1usize; columns];

    if let Some(headers) = headers {
        for (i, h) in headers.iter().enumerate() {
            widths[i] = widths[i].max(display_width(h));
        }
    }
    for row in &page.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }
    widths
}

/// Build table lines for `page`.
///
/// The header row is only emitted when `headers` is present. `editing`
/// marks the cursor cell as being typed into.
pub fn build_table_lines(
    headers: Option<&[String]>,
    page: &Page,
    cursor: Option<CellCursor>,
    editing: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let widths = column_widths(headers, page);
    let index_width = page
        .rows
        .last()
        .map_or(3, |r| r.number.to_string().len().max(3));

    if let Some(headers) = headers {
        let mut spans = vec![Span::raw(" ".repeat(index_width)), Span::raw(" │ ")];
        for (i, width) in widths.iter().enumerate() {
            let title = headers.get(i).map(String::as_str).unwrap_or("");
            spans.push(Span::styled(
                pad(title, *width),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" │ "));
        }
        lines.push(Line::from(spans));

        let separator = std::iter::once(index_width)
            .chain(widths.iter().copied())
            .map(|w| "─".repeat(w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));
    }

    if page.is_empty() {
        lines.push(Line::from(Span::styled(
            "No rows on this page",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for (r, row) in page.rows.iter().enumerate() {
        let mut spans = vec![
            Span::styled(
                format!("{:>width$}", row.number, width = index_width),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" │ "),
        ];
        for (c, width) in widths.iter().enumerate() {
            let cell = row.cells.get(c).map(String::as_str).unwrap_or("");
            let on_cursor = cursor == Some(CellCursor { row: r, col: c });
            let style = match (on_cursor, editing) {
                (true, true) => Style::default().fg(Color::Black).bg(Color::Yellow),
                (true, false) => Style::default().fg(Color::Black).bg(Color::Cyan),
                _ => Style::default().fg(Color::White),
            };
            let text = if on_cursor && editing {
                // Never truncate the cell being typed into
                let typed = format!("{}_", cell);
                let fill = width.saturating_sub(display_width(&typed));
                format!("{}{}", typed, " ".repeat(fill))
            } else {
                pad(cell, *width)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" │ "));
        }
        lines.push(Line::from(spans));
    }

    lines
}
