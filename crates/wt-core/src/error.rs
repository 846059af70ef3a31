//! Error taxonomy shared across wt-tools.

use crate::SessionName;
use thiserror::Error;

/// Errors surfaced by the dispatcher and the tmux control adapter.
#[derive(Error, Debug)]
pub enum WtError {
    /// Usage-level validation failure; never reaches the adapter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Target session does not exist on the server.
    #[error("session '{name}' not found")]
    SessionNotFound { name: SessionName },

    /// A session with this name is already running.
    #[error("session '{name}' already exists")]
    SessionAlreadyExists { name: SessionName },

    /// Target window index does not exist in the session.
    #[error("window {index} not found in session '{session}'")]
    WindowNotFound { session: SessionName, index: u32 },

    /// A window command ran outside tmux without an explicit --session.
    #[error("not inside a tmux session")]
    NotInTmux,

    /// The server rejected a command for a reason outside the taxonomy.
    #[error("tmux command failed: {0}")]
    CommandFailed(String),

    /// A listing line did not match the requested format.
    #[error("unexpected tmux output: {0}")]
    MalformedOutput(String),

    /// Control channel unreachable (tmux binary missing, spawn failure).
    #[error("failed to run tmux: {0}")]
    Io(#[from] std::io::Error),
}

impl WtError {
    /// Process exit code for this error: 1 for usage errors, 2 for
    /// operation failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) => 1,
            _ => 2,
        }
    }
}

/// Result type for wt-tools operations.
pub type WtResult<T> = Result<T, WtError>;
