//! Window value record.

/// Snapshot of one tmux window, taken from a single listing exchange.
///
/// Indices are unique within a session at any instant; tmux reuses the
/// lowest free index when a window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Index within the owning session.
    pub index: u32,
    pub name: String,
    /// Whether this is the session's active window.
    pub active: bool,
    /// Number of panes in the window.
    pub panes: u32,
}
