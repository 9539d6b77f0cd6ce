//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `ResultSet` - decoded query result
//! - `Pager` / `Page` - pagination cursor and the rows it selects
//! - `TablePanel`, `AppMode`, focus enums - presentation state
//! - `ModalStack` - Modal overlay management

pub mod modal;
pub mod page;
pub mod pager;
pub mod result_set;
pub mod ui;

// Re-export commonly used types
pub use modal::{Modal, ModalStack};
pub use page::Page;
pub use pager::{page_count, parse_page_size, Pager};
pub use result_set::ResultSet;
pub use ui::{AppMode, BrowseField, LoginField, TablePanel};
