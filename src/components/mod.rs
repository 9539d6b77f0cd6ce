//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod browser;
pub mod dialog;
pub mod help_dialog;
pub mod input;
pub mod layout;
pub mod login;
pub mod status_bar;
pub mod table;

pub use browser::{BrowserComponent, QuerySubmission, MISSING_TABLE_ALERT};
pub use dialog::{AlertDialog, QuitDialog};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_screen_layout, centered_popup};
pub use login::LoginComponent;
pub use status_bar::{render_help_bar, render_status_bar, render_tabs, StatusContext};
