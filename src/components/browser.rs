//! Table browser screen
//!
//! Owns everything the table flow needs: the query form, the cached result
//! set, the pagination cursor and the rendered page. The page-size field is
//! re-read on every paging operation, so changing it mid-browse takes effect
//! on the next page turn.

use crate::action::Action;
use crate::component::Component;
use crate::components::input::TextInput;
use crate::components::layout::{form_columns, split_form};
use crate::components::table::{build_table_lines, CellCursor};
use crate::config::Config;
use crate::model::{page_count, parse_page_size, BrowseField, Page, Pager, ResultSet, TablePanel};
use crate::services::QueryRequest;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

pub const MISSING_TABLE_ALERT: &str = "Please input table name!!!";

/// What pressing "load" amounts to right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySubmission {
    /// The load control was disabled by an earlier successful load
    Disabled,
    /// No table name; an alert must be shown and nothing sent
    MissingTable,
    Ready(QueryRequest),
}

pub struct BrowserComponent {
    pub table: TextInput,
    pub command: TextInput,
    pub page_size: TextInput,
    pub page_number: TextInput,
    pub focus: BrowseField,

    /// Cached result of the last successful query
    pub result: Option<ResultSet>,
    /// Column headers as last rendered
    pub headers: Option<Vec<String>>,
    /// Set once headers have been rendered for a load
    pub columns_rendered: bool,
    pub pager: Pager,
    pub page: Page,
    pub panel: TablePanel,

    /// One-shot guard: cleared after the first successful load
    pub load_enabled: bool,
    /// A query is in flight
    pub pending: bool,

    pub cursor: CellCursor,
    pub editing: bool,
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl BrowserComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            table: TextInput::new(config.last_table.clone()),
            command: TextInput::new(config.command.clone()),
            page_size: TextInput::new(config.page_size.to_string()),
            page_number: TextInput::default(),
            focus: BrowseField::Table,
            result: None,
            headers: None,
            columns_rendered: false,
            pager: Pager::new(),
            page: Page::default(),
            panel: TablePanel::default(),
            load_enabled: true,
            pending: false,
            cursor: CellCursor::default(),
            editing: false,
        }
    }

    /// Page size as currently typed in the page-size field
    pub fn live_page_size(&self) -> Option<usize> {
        parse_page_size(&self.page_size.value)
    }

    pub fn total_rows(&self) -> usize {
        self.result.as_ref().map_or(0, ResultSet::total_rows)
    }

    /// Validate the form and build the request for `showtable.json`
    pub fn prepare_query(&self, viscols: u8) -> QuerySubmission {
        if !self.load_enabled {
            return QuerySubmission::Disabled;
        }
        if self.table.value.is_empty() {
            return QuerySubmission::MissingTable;
        }
        QuerySubmission::Ready(QueryRequest::new(
            &self.command.value,
            &self.table.value,
            viscols,
        ))
    }

    /// Replace the cached result set and render the current page.
    ///
    /// Headers are taken only when the request asked for them. The page
    /// cursor is left where it was.
    pub fn ingest(&mut self, result: ResultSet, with_headers: bool) {
        if with_headers {
            self.headers = result.headers.clone();
            self.panel.expand();
            self.columns_rendered = true;
        }
        self.result = Some(result);
        self.rerender();
        self.load_enabled = false;
        self.pending = false;
        debug!(
            rows = self.total_rows(),
            page = self.pager.index(),
            "result set ingested"
        );
    }

    /// Discard the rendered rows and rebuild them for the current cursor
    pub fn rerender(&mut self) {
        self.page.clear();
        self.editing = false;
        if let (Some(result), Some(page_size)) = (&self.result, self.live_page_size()) {
            self.page = Page::fill(result, self.pager, page_size);
        }
        self.clamp_cursor();
    }

    pub fn next_page(&mut self) -> bool {
        let Some(page_size) = self.live_page_size() else {
            return false;
        };
        if self.result.is_none() {
            return false;
        }
        self.apply(self.pager.next(self.total_rows(), page_size))
    }

    pub fn prev_page(&mut self) -> bool {
        if self.result.is_none() {
            return false;
        }
        self.apply(self.pager.prev())
    }

    /// Jump to the page typed in the page-number field
    pub fn goto_page(&mut self) -> bool {
        let Some(page_size) = self.live_page_size() else {
            return false;
        };
        if self.result.is_none() {
            return false;
        }
        let target = self
            .pager
            .goto(&self.page_number.value, self.total_rows(), page_size);
        self.apply(target)
    }

    fn apply(&mut self, target: Option<Pager>) -> bool {
        match target {
            Some(pager) => {
                self.pager = pager;
                self.rerender();
                true
            }
            None => false,
        }
    }

    /// `Page i/N · rows a-b of T` for the current window
    pub fn page_summary(&self) -> Option<String> {
        self.result.as_ref()?;
        let page_size = self.live_page_size()?;
        let total = self.total_rows();
        let pages = page_count(total, page_size);
        let window = self.pager.window(total, page_size);
        let rows = if window.is_empty() {
            "no rows".to_string()
        } else {
            format!("rows {}-{} of {}", window.start + 1, window.end, total)
        };
        Some(format!(
            "Page {}/{} · {}",
            self.pager.index() + 1,
            pages,
            rows
        ))
    }

    fn clamp_cursor(&mut self) {
        let rows = self.page.len();
        let cols = self.page.column_count();
        self.cursor.row = self.cursor.row.min(rows.saturating_sub(1));
        self.cursor.col = self.cursor.col.min(cols.saturating_sub(1));
    }

    fn move_cursor(&mut self, action: &Action) {
        if self.page.is_empty() {
            return;
        }
        match action {
            Action::CellUp => self.cursor.row = self.cursor.row.saturating_sub(1),
            Action::CellDown => self.cursor.row += 1,
            Action::CellLeft => self.cursor.col = self.cursor.col.saturating_sub(1),
            Action::CellRight => self.cursor.col += 1,
            _ => {}
        }
        self.clamp_cursor();
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            BrowseField::Table => Some(&mut self.table),
            BrowseField::Command => Some(&mut self.command),
            BrowseField::PageSize => Some(&mut self.page_size),
            BrowseField::PageNumber => Some(&mut self.page_number),
            BrowseField::Grid => None,
        }
    }

    /// Keys while a cell is being edited; the edit stays on the rendered page
    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<Action> {
        let CellCursor { row, col } = self.cursor;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing = false,
            KeyCode::Backspace => {
                if let Some(cell) = self.page.cell_mut(row, col) {
                    cell.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(cell) = self.page.cell_mut(row, col) {
                    cell.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CellUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CellDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::CellLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::CellRight),
            KeyCode::Char('n') => Some(Action::NextPage),
            KeyCode::Char('p') => Some(Action::PrevPage),
            KeyCode::Char('t') => Some(Action::TogglePanel),
            KeyCode::Enter => {
                if self.page.cell_mut(self.cursor.row, self.cursor.col).is_some() {
                    self.editing = true;
                }
                None
            }
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }
}

impl Component for BrowserComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            return Ok(self.handle_edit_key(key));
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('n') if ctrl => Some(Action::NextPage),
            KeyCode::Char('p') if ctrl => Some(Action::PrevPage),
            KeyCode::Char('t') if ctrl => Some(Action::TogglePanel),
            _ if self.focus == BrowseField::Grid => self.handle_grid_key(key),
            KeyCode::Enter if self.focus == BrowseField::PageNumber => Some(Action::GotoPage),
            KeyCode::Enter => Some(Action::SubmitQuery),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => {
                if let Some(input) = self.focused_input() {
                    input.handle_key(key);
                }
                None
            }
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextPage => {
                self.next_page();
            }
            Action::PrevPage => {
                self.prev_page();
            }
            Action::GotoPage => {
                self.goto_page();
            }
            Action::TogglePanel => {
                self.panel.toggle();
            }
            Action::CellUp | Action::CellDown | Action::CellLeft | Action::CellRight => {
                self.move_cursor(&action);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (form, body) = split_form(area, 3);
        let columns = form_columns(form, 4);
        let fields = [
            (&self.table, BrowseField::Table),
            (&self.command, BrowseField::Command),
            (&self.page_size, BrowseField::PageSize),
            (&self.page_number, BrowseField::PageNumber),
        ];
        for ((input, field), rect) in fields.into_iter().zip(columns) {
            input.draw(frame, rect, field.label(), self.focus == field);
        }

        let grid_focused = self.focus == BrowseField::Grid;
        let border = if grid_focused { Color::Cyan } else { Color::DarkGray };
        let mut title = vec![Span::styled(
            format!(" {} ", self.panel.label()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(summary) = self.page_summary() {
            title.push(Span::styled(
                format!("{} ", summary),
                Style::default().fg(Color::Yellow),
            ));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title))
            .border_style(Style::default().fg(border));

        let lines: Vec<Line<'static>> = if !self.panel.is_visible() {
            Vec::new()
        } else if self.pending {
            vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            ))]
        } else if self.result.is_none() {
            vec![Line::from(Span::styled(
                "Type a table name and press Enter to load",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            let cursor = grid_focused.then_some(self.cursor);
            build_table_lines(self.headers.as_deref(), &self.page, cursor, self.editing)
        };

        // Keep the cursor row on screen
        let header_lines = if self.headers.is_some() { 2 } else { 0 };
        let visible = body.height.saturating_sub(2) as usize;
        let cursor_line = header_lines + self.cursor.row;
        let scroll = if grid_focused && cursor_line >= visible {
            cursor_line + 1 - visible
        } else {
            0
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0));
        frame.render_widget(paragraph, body);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::{COLLAPSED_LABEL, EXPANDED_LABEL};
    use ratatui::{backend::TestBackend, Terminal};

    fn numbered(total: usize) -> ResultSet {
        ResultSet {
            headers: Some(vec!["n".to_string()]),
            rows: (0..total).map(|g| vec![g.to_string()]).collect(),
        }
    }

    fn browser_with(total: usize, page_size: usize) -> BrowserComponent {
        let mut browser = BrowserComponent::default();
        browser.page_size.value = page_size.to_string();
        browser.ingest(numbered(total), true);
        browser
    }

    fn press(browser: &mut BrowserComponent, code: KeyCode) -> Option<Action> {
        browser
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_missing_table_is_rejected_before_request() {
        let browser = BrowserComponent::default();
        assert_eq!(browser.prepare_query(1), QuerySubmission::MissingTable);
    }

    #[test]
    fn test_query_request_from_form() {
        let mut browser = BrowserComponent::default();
        browser.table.value = "users".to_string();
        assert_eq!(
            browser.prepare_query(1),
            QuerySubmission::Ready(QueryRequest::new("SELECT", "users", 1))
        );
    }

    #[test]
    fn test_load_is_one_shot() {
        let mut browser = browser_with(3, 2);
        browser.table.value = "users".to_string();
        assert!(!browser.load_enabled);
        assert_eq!(browser.prepare_query(1), QuerySubmission::Disabled);
    }

    #[test]
    fn test_ingest_renders_first_page_and_headers() {
        let browser = browser_with(10, 3);
        assert_eq!(browser.page.len(), 3);
        assert_eq!(browser.headers, Some(vec!["n".to_string()]));
        assert!(browser.columns_rendered);
        assert_eq!(browser.panel.label(), EXPANDED_LABEL);
    }

    #[test]
    fn test_ingest_without_viscols_keeps_headers() {
        let mut browser = BrowserComponent::default();
        browser.ingest(numbered(2), false);
        assert!(browser.headers.is_none());
        assert!(!browser.columns_rendered);
        assert_eq!(browser.page.len(), 2);
    }

    #[test]
    fn test_partial_last_page_via_goto() {
        let mut browser = browser_with(10, 3);
        browser.page_number.value = "4".to_string();
        assert!(browser.goto_page());
        assert_eq!(browser.pager.index(), 3);
        assert_eq!(browser.page.len(), 1);
        assert_eq!(browser.page.rows[0].number, 10);
        assert_eq!(browser.page.rows[0].key, "r009");
    }

    #[test]
    fn test_goto_rejects_blank_and_past_end() {
        let mut browser = browser_with(10, 3);
        browser.page_number.value = String::new();
        assert!(!browser.goto_page());
        browser.page_number.value = "5".to_string();
        assert!(!browser.goto_page());
        assert_eq!(browser.pager.index(), 0);
    }

    #[test]
    fn test_next_is_noop_on_last_page() {
        let mut browser = browser_with(9, 3);
        assert!(browser.next_page());
        assert!(browser.next_page());
        assert_eq!(browser.pager.index(), 2);
        assert!(!browser.next_page());
        assert_eq!(browser.pager.index(), 2);
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut browser = browser_with(9, 3);
        assert!(!browser.prev_page());
        assert_eq!(browser.pager.index(), 0);
    }

    #[test]
    fn test_page_size_is_read_live() {
        let mut browser = browser_with(10, 3);
        browser.next_page();
        assert_eq!(browser.page.rows[0].number, 4);

        browser.page_size.value = "2".to_string();
        assert!(browser.next_page());
        assert_eq!(browser.pager.index(), 2);
        assert_eq!(browser.page.rows[0].number, 5);

        // A larger page size can leave the cursor past the end
        browser.page_size.value = "5".to_string();
        browser.rerender();
        assert!(browser.page.is_empty());
        assert_eq!(browser.page_summary().unwrap(), "Page 3/2 · no rows");
    }

    #[test]
    fn test_invalid_page_size_blocks_paging() {
        let mut browser = browser_with(10, 3);
        browser.page_size.value = "0".to_string();
        assert!(!browser.next_page());
        browser.page_number.value = "2".to_string();
        assert!(!browser.goto_page());
    }

    #[test]
    fn test_cursor_survives_new_result_set() {
        let mut browser = browser_with(10, 3);
        browser.next_page();
        browser.ingest(numbered(20), true);
        assert_eq!(browser.pager.index(), 1);
        assert_eq!(browser.page.rows[0].number, 4);
    }

    #[test]
    fn test_toggle_panel() {
        let mut browser = browser_with(3, 3);
        browser.update(Action::TogglePanel).unwrap();
        assert_eq!(browser.panel.label(), COLLAPSED_LABEL);
        browser.update(Action::TogglePanel).unwrap();
        assert!(browser.panel.is_visible());
    }

    #[test]
    fn test_enter_routes_by_field() {
        let mut browser = BrowserComponent::default();
        assert_eq!(press(&mut browser, KeyCode::Enter), Some(Action::SubmitQuery));

        browser.focus = BrowseField::PageNumber;
        assert_eq!(press(&mut browser, KeyCode::Enter), Some(Action::GotoPage));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut browser = BrowserComponent::default();
        for c in "users".chars() {
            press(&mut browser, KeyCode::Char(c));
        }
        press(&mut browser, KeyCode::Tab);
        press(&mut browser, KeyCode::Char('x'));
        assert_eq!(browser.table.value, "users");
        assert_eq!(browser.command.value, "SELECTx");
    }

    #[test]
    fn test_cell_edit_is_local_and_discarded() {
        let mut browser = browser_with(4, 2);
        browser.focus = BrowseField::Grid;
        assert_eq!(press(&mut browser, KeyCode::Down), Some(Action::CellDown));
        browser.update(Action::CellDown).unwrap();
        assert_eq!(browser.cursor.row, 1);

        press(&mut browser, KeyCode::Enter);
        assert!(browser.editing);
        press(&mut browser, KeyCode::Char('!'));
        press(&mut browser, KeyCode::Enter);
        assert!(!browser.editing);
        assert_eq!(browser.page.rows[1].cells[0], "1!");
        assert_eq!(browser.result.as_ref().unwrap().rows[1][0], "1");

        browser.next_page();
        browser.prev_page();
        assert_eq!(browser.page.rows[1].cells[0], "1");
    }

    #[test]
    fn test_cursor_is_clamped_to_page() {
        let mut browser = browser_with(5, 3);
        browser.focus = BrowseField::Grid;
        for _ in 0..5 {
            browser.update(Action::CellDown).unwrap();
            browser.update(Action::CellRight).unwrap();
        }
        assert_eq!(browser.cursor, CellCursor { row: 2, col: 0 });

        browser.next_page();
        assert_eq!(browser.cursor.row, 1);
    }

    #[test]
    fn test_draw_shows_rows_and_summary() {
        let mut browser = browser_with(10, 3);
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|frame| {
                browser.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains(EXPANDED_LABEL));
        assert!(screen.contains("Page 1/4 · rows 1-3 of 10"));
    }

    #[test]
    fn test_collapsed_panel_hides_rows() {
        let mut browser = browser_with(3, 3);
        browser.panel.toggle();
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                browser.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains(COLLAPSED_LABEL));
        assert!(!screen.contains("│ 2"));
    }
}
