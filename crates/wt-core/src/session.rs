//! Session value records and name validation.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{WtError, WtResult};

/// Validated tmux session name.
///
/// tmux target syntax reserves `.` and `:` as separators, so names
/// containing them cannot be addressed unambiguously. Control characters
/// would corrupt the line-oriented listings the adapter parses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionName(String);

impl SessionName {
    /// Validates a user-supplied session name.
    ///
    /// # Errors
    ///
    /// Returns [`WtError::InvalidArgument`] if the name is empty, contains
    /// control characters, or contains `.` or `:`.
    pub fn new(name: impl Into<String>) -> WtResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WtError::InvalidArgument(
                "session name must not be empty".to_string(),
            ));
        }
        if name.chars().any(char::is_control) {
            return Err(WtError::InvalidArgument(format!(
                "session name {name:?} contains control characters"
            )));
        }
        if name.contains('.') || name.contains(':') {
            return Err(WtError::InvalidArgument(format!(
                "session name '{name}' must not contain '.' or ':'"
            )));
        }
        Ok(Self(name))
    }

    /// Wraps a name already reported by the tmux server.
    ///
    /// Listing output is trusted as-is; validation only applies to names
    /// the user typed.
    pub fn from_server(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the underlying string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Snapshot of one tmux session, taken from a single listing exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: SessionName,
    /// Whether any client is currently attached.
    pub attached: bool,
    /// Number of windows in the session.
    pub windows: u32,
    /// Server-reported creation time, when available.
    pub created: Option<DateTime<Utc>>,
}
