//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `LectureRequest` - the fields collected per scaffold
//! - `CanvasLayout` - the persisted node rectangles
//! - `ScaffoldPlan` - the ephemeral generator output
//! - `ScaffoldHistory` - persisted record of past scaffolds
//! - `ModalStack` - modal overlay management

pub mod history;
pub mod layout;
pub mod lecture;
pub mod modal;
pub mod plan;
pub mod ui;

// Re-export commonly used types
pub use history::{ScaffoldHistoryEntry, ScaffoldStatus};
pub use layout::{BlockRect, CanvasLayout};
pub use lecture::LectureRequest;
pub use plan::{Artifact, ScaffoldPlan};
pub use ui::AppMode;
