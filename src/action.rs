//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; polls in-flight requests
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between the login and table screens
    SwitchScreen,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Requests
    // ─────────────────────────────────────────────────────────────────────────
    /// POST the login form to login.json
    SubmitLogin,
    /// POST the table query to showtable.json
    SubmitQuery,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next page
    NextPage,
    /// Move to the previous page
    PrevPage,
    /// Jump to the page typed in the page-number field
    GotoPage,
    /// Show/hide the table container
    TogglePanel,

    // ─────────────────────────────────────────────────────────────────────────
    // Cell Cursor
    // ─────────────────────────────────────────────────────────────────────────
    CellUp,
    CellDown,
    CellLeft,
    CellRight,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SwitchScreen => write!(f, "SwitchScreen"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::SubmitLogin => write!(f, "SubmitLogin"),
            Action::SubmitQuery => write!(f, "SubmitQuery"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::GotoPage => write!(f, "GotoPage"),
            Action::TogglePanel => write!(f, "TogglePanel"),
            Action::CellUp => write!(f, "CellUp"),
            Action::CellDown => write!(f, "CellDown"),
            Action::CellLeft => write!(f, "CellLeft"),
            Action::CellRight => write!(f, "CellRight"),
        }
    }
}
