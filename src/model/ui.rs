//! UI state - presentation state separate from scaffold data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// First-run wizard, shown when no config exists
    Setup,
    /// Normal operation
    Running,
}
