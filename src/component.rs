//! Component trait - Interface for UI components
//!
//! Each screen and dialog owns its state, turns key events into Actions,
//! applies Actions in `update`, and renders itself in `draw`.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - Convert a key into an Action (text fields may
///    consume the key directly and return `None`)
/// 2. `update` - Apply an Action; may return a follow-up Action
/// 3. `draw` - Render into `area`; no state changes
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
