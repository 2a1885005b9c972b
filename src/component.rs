//! Component trait - Interface for UI components
//!
//! Each component owns its state, key handling, and rendering. Components
//! never mutate each other; they communicate through Actions processed by the
//! App root.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow per event:
/// 1. `handle_key_event` converts a key press into a semantic Action
/// 2. `update` applies Actions to component state
/// 3. `draw` renders the current state
pub trait Component {
    /// One-time setup after construction
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into an optional Action. State changes belong in
    /// `update`, not here; dialogs that edit text input are the exception.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an Action, optionally emitting a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into the given area
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
