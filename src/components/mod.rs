//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod lecture_dialog;
pub mod quit_dialog;
pub mod result_dialog;
pub mod settings_dialog;
pub mod setup;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_home_layout, centered_popup, clip_tail};
pub use lecture_dialog::LectureDialog;
pub use quit_dialog::QuitDialog;
pub use result_dialog::{ResultDialog, ScaffoldSummary};
pub use settings_dialog::SettingsDialog;
pub use setup::SetupComponent;
