//! Action enum - All possible application actions
//!
//! Components emit Actions in response to key events, and the App processes
//! them to update state. An update may chain into a follow-up Action.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // App lifecycle
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // Modals
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the new-lecture prompt
    OpenNewLecture,
    /// Open the settings editor
    OpenSettings,
    /// Open the help overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // History list navigation
    /// Select next history entry
    NextEntry,
    /// Select previous history entry
    PrevEntry,

    // Dialog results
    /// The new-lecture dialog validated its fields; create the scaffold
    LectureSubmitted,
    /// The settings dialog validated and staged a new config
    SettingsSaved,
    /// The first-run wizard saved its config
    SetupConfirm,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenNewLecture => write!(f, "OpenNewLecture"),
            Action::OpenSettings => write!(f, "OpenSettings"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::NextEntry => write!(f, "NextEntry"),
            Action::PrevEntry => write!(f, "PrevEntry"),
            Action::LectureSubmitted => write!(f, "LectureSubmitted"),
            Action::SettingsSaved => write!(f, "SettingsSaved"),
            Action::SetupConfirm => write!(f, "SetupConfirm"),
        }
    }
}
