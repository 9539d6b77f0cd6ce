//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes keys to the active screen or the top modal, starts requests,
//! and feeds their results back into the screens on each tick.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_screen_layout, render_help_bar, render_status_bar, render_tabs, AlertDialog,
    BrowserComponent, HelpDialog, LoginComponent, QuerySubmission, QuitDialog, StatusContext,
    MISSING_TABLE_ALERT,
};
use crate::config::Config;
use crate::error::ClientError;
use crate::model::{AppMode, Modal, ModalStack, ResultSet};
use crate::services::{load_access_token, ApiClient, Poll, RequestRunner};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Active screen
    pub mode: AppMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Loaded configuration; written back after successful requests
    pub config: Config,

    /// Directory holding config.json, the access token and the log
    pub config_dir: PathBuf,

    /// HTTP client, absent when the configured server url is unusable
    client: Option<ApiClient>,

    login_runner: RequestRunner<Result<String, ClientError>>,
    query_runner: RequestRunner<Result<ResultSet, ClientError>>,

    /// Whether the query in flight asked for column headers
    pending_headers: bool,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message shown in the status line
    pub error: Option<String>,

    /// When the current result set arrived
    pub last_loaded: Option<DateTime<Local>>,

    /// Token read from client-side storage after each table load
    pub access_token: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub login: LoginComponent,
    pub browser: BrowserComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config, config_dir: PathBuf) -> App {
        let (client, error) = match ApiClient::new(&config.server_url) {
            Ok(client) => (Some(client), None),
            Err(e) => {
                warn!(error = %e, "no usable server url");
                (None, Some(e.to_string()))
            }
        };

        App {
            mode: AppMode::Login,
            modals: ModalStack::new(),
            login: LoginComponent::new(&config.last_username),
            browser: BrowserComponent::new(&config),
            config,
            config_dir,
            client,
            login_runner: RequestRunner::new(),
            query_runner: RequestRunner::new(),
            pending_headers: true,
            should_quit: false,
            error,
            last_loaded: None,
            access_token: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn submit_login(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let request = self.login.request();
        info!(user = %self.login.username.value, "submitting login");
        self.login.pending = true;
        self.login_runner.spawn(move || client.login(&request));
    }

    fn submit_query(&mut self) {
        let viscols = self.config.viscols;
        match self.browser.prepare_query(viscols) {
            QuerySubmission::Disabled => {
                debug!("load control disabled, ignoring");
            }
            QuerySubmission::MissingTable => {
                self.modals.push_unique(Modal::Alert {
                    message: MISSING_TABLE_ALERT.to_string(),
                });
            }
            QuerySubmission::Ready(request) => {
                let Some(client) = self.client.clone() else {
                    return;
                };
                info!(sql = %request.sql, viscols, "submitting query");
                self.browser.pending = true;
                self.pending_headers = request.wants_headers();
                self.query_runner.spawn(move || client.show_table(&request));
            }
        }
    }

    /// Collect finished requests
    fn poll_requests(&mut self) {
        match self.login_runner.poll() {
            Poll::Ready(result, elapsed) => {
                debug!(elapsed_ms = elapsed.as_millis() as u64, "login finished");
                self.finish_login(result);
            }
            Poll::Lost => {
                warn!("login worker exited without a result");
                self.login.pending = false;
            }
            Poll::Idle | Poll::Pending => {}
        }

        match self.query_runner.poll() {
            Poll::Ready(result, elapsed) => {
                debug!(elapsed_ms = elapsed.as_millis() as u64, "query finished");
                self.finish_query(result);
            }
            Poll::Lost => {
                warn!("query worker exited without a result");
                self.browser.pending = false;
            }
            Poll::Idle | Poll::Pending => {}
        }
    }

    /// Non-200 and transport failures leave the screen untouched
    fn finish_login(&mut self, result: Result<String, ClientError>) {
        match result {
            Ok(body) => {
                self.login.set_reply(&body);
                self.config.last_username = self.login.username.value.clone();
                self.save_config();
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.login.pending = false;
            }
        }
    }

    fn finish_query(&mut self, result: Result<ResultSet, ClientError>) {
        match result {
            Ok(result_set) => {
                info!(rows = result_set.total_rows(), "result set received");
                self.browser.ingest(result_set, self.pending_headers);
                self.last_loaded = Some(Local::now());
                self.access_token = load_access_token(&self.config_dir);
                self.error = None;
                self.config.last_table = self.browser.table.value.clone();
                self.save_config();
            }
            Err(e) if e.is_payload_error() => {
                warn!(error = %e, "unreadable result set");
                self.browser.pending = false;
                self.error = Some(format!("could not read result set: {}", e));
            }
            Err(e) => {
                warn!(error = %e, "query failed");
                self.browser.pending = false;
            }
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save_to(&self.config_dir) {
            warn!(error = %e, "could not save config");
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Alert { message } => AlertDialog::new(message).handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Alert { message } => AlertDialog::new(message).draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match key.code {
            KeyCode::F(1) => Ok(Some(Action::OpenHelp)),
            KeyCode::F(2) => Ok(Some(Action::SwitchScreen)),
            _ => match self.mode {
                AppMode::Login => self.login.handle_key_event(key),
                AppMode::Browse => self.browser.handle_key_event(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.poll_requests(),
            Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,
            Action::SwitchScreen => self.mode = self.mode.toggled(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push_unique(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push_unique(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Requests
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitLogin => self.submit_login(),
            Action::SubmitQuery => self.submit_query(),

            // ─────────────────────────────────────────────────────────────────
            // Pagination & grid (delegate to BrowserComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage
            | Action::PrevPage
            | Action::GotoPage
            | Action::TogglePanel
            | Action::CellUp
            | Action::CellDown
            | Action::CellLeft
            | Action::CellRight => {
                return self.browser.update(action);
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_screen_layout(area);

        render_tabs(frame, layout.tabs, self.mode);
        match self.mode {
            AppMode::Login => self.login.draw(frame, layout.main)?,
            AppMode::Browse => self.browser.draw(frame, layout.main)?,
        }

        let loaded = self
            .last_loaded
            .map(|t| t.format("%H:%M:%S").to_string());
        let ctx = StatusContext {
            server: self
                .client
                .as_ref()
                .map_or(self.config.server_url.as_str(), |c| c.base_url().as_str()),
            login_pending: self.login_runner.is_pending(),
            query_pending: self.query_runner.is_pending(),
            last_loaded: loaded.as_deref(),
            page_summary: self.browser.page_summary(),
            has_token: self.access_token.is_some(),
            error: self.error.as_deref(),
        };
        render_status_bar(frame, layout.status, &ctx);
        render_help_bar(frame, layout.help, self.mode);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
