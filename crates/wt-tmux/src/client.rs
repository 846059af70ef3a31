//! Client issuing control commands against a running tmux server.
//!
//! Every operation is a single request/response exchange. Session
//! targets are prefixed with `=` so tmux matches names exactly instead
//! of by prefix.

use tracing::debug;
use wt_core::{Session, SessionName, Window, WtError, WtResult};

use crate::exec::{SystemTmux, TmuxExecutor, TmuxOutput};
use crate::parse;

// ============================================================================
// Server Error Classification
// ============================================================================

/// What the server's error text tells us about a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServerError {
    DuplicateSession,
    NoSuchSession,
    NoSuchWindow,
    NoServer,
    Other,
}

fn classify_stderr(stderr: &str) -> ServerError {
    let message = stderr.trim();
    if message.contains("duplicate session") {
        ServerError::DuplicateSession
    } else if message.contains("no server running") || message.contains("error connecting to") {
        ServerError::NoServer
    } else if message.contains("can't find window") || message.contains("window not found") {
        ServerError::NoSuchWindow
    } else if message.contains("can't find session")
        || message.contains("session not found")
        || message.contains("no such session")
    {
        ServerError::NoSuchSession
    } else {
        ServerError::Other
    }
}

fn command_failed(command: &str, out: &TmuxOutput) -> WtError {
    let detail = out.stderr.trim();
    if detail.is_empty() {
        WtError::CommandFailed(format!("{command} exited with code {:?}", out.code))
    } else {
        WtError::CommandFailed(format!("{command}: {detail}"))
    }
}

fn first_line(stdout: &str) -> WtResult<&str> {
    stdout
        .lines()
        .find(|line| !line.is_empty())
        .ok_or_else(|| WtError::MalformedOutput("empty response where a record was expected".to_string()))
}

// ============================================================================
// Client
// ============================================================================

/// Control client for a running tmux server.
///
/// Generic over the executor so tests can script exchanges; production
/// code uses [`SystemTmux`]. Whether this process runs inside a tmux
/// client is resolved once at construction, never from global mutable
/// state.
#[derive(Debug)]
pub struct TmuxClient<E = SystemTmux> {
    exec: E,
    inside_tmux: bool,
}

impl TmuxClient<SystemTmux> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_executor(SystemTmux)
    }
}

impl Default for TmuxClient<SystemTmux> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TmuxExecutor> TmuxClient<E> {
    /// Builds a client around a custom executor. tmux-client detection
    /// still comes from the `TMUX` environment variable.
    pub fn with_executor(exec: E) -> Self {
        Self {
            exec,
            inside_tmux: std::env::var_os("TMUX").is_some(),
        }
    }

    /// Overrides tmux-client detection. Used by tests and by callers
    /// that resolved it themselves.
    #[must_use]
    pub fn inside_tmux_override(mut self, inside: bool) -> Self {
        self.inside_tmux = inside;
        self
    }

    /// True when this process runs inside a tmux client.
    #[must_use]
    pub fn inside_tmux(&self) -> bool {
        self.inside_tmux
    }

    /// Checks whether a session with this exact name exists.
    ///
    /// A missing server counts as "no such session".
    pub fn has_session(&self, name: &SessionName) -> WtResult<bool> {
        let target = format!("={name}");
        let out = self.exec.run(&["has-session", "-t", &target])?;
        if out.success() {
            return Ok(true);
        }
        match classify_stderr(&out.stderr) {
            ServerError::NoSuchSession | ServerError::NoServer => Ok(false),
            _ => Err(command_failed("has-session", &out)),
        }
    }

    /// Creates a new detached session and returns its record.
    ///
    /// # Errors
    ///
    /// [`WtError::SessionAlreadyExists`] when the name is taken. The
    /// pre-check keeps the common case from reaching `new-session`;
    /// the stderr classification covers losing a creation race.
    pub fn create_session(&self, name: &SessionName) -> WtResult<Session> {
        if self.has_session(name)? {
            return Err(WtError::SessionAlreadyExists { name: name.clone() });
        }
        let out = self.exec.run(&[
            "new-session",
            "-d",
            "-s",
            name.as_str(),
            "-P",
            "-F",
            parse::SESSION_FORMAT,
        ])?;
        if !out.success() {
            return Err(match classify_stderr(&out.stderr) {
                ServerError::DuplicateSession => WtError::SessionAlreadyExists { name: name.clone() },
                _ => command_failed("new-session", &out),
            });
        }
        debug!(session = %name, "created session");
        parse::parse_session_line(first_line(&out.stdout)?)
    }

    /// Attaches this terminal to a session.
    ///
    /// Inside tmux the client is switched instead, since sessions must
    /// not nest.
    pub fn attach_session(&self, name: &SessionName) -> WtResult<()> {
        if !self.has_session(name)? {
            return Err(WtError::SessionNotFound { name: name.clone() });
        }
        let target = format!("={name}");
        if self.inside_tmux {
            let out = self.exec.run(&["switch-client", "-t", &target])?;
            if !out.success() {
                return Err(self.session_error(name, "switch-client", &out));
            }
            debug!(session = %name, "switched client");
        } else {
            let ok = self.exec.run_inherit(&["attach-session", "-t", &target])?;
            if !ok {
                return Err(WtError::CommandFailed(
                    "attach-session exited with an error".to_string(),
                ));
            }
            debug!(session = %name, "attach-session finished");
        }
        Ok(())
    }

    /// Kills a session and all its windows.
    pub fn kill_session(&self, name: &SessionName) -> WtResult<()> {
        let target = format!("={name}");
        let out = self.exec.run(&["kill-session", "-t", &target])?;
        if !out.success() {
            return Err(self.session_error(name, "kill-session", &out));
        }
        debug!(session = %name, "killed session");
        Ok(())
    }

    /// Lists all sessions on the server.
    ///
    /// A server that is not running has no sessions; that is an empty
    /// listing, not an error.
    pub fn list_sessions(&self) -> WtResult<Vec<Session>> {
        let out = self.exec.run(&["list-sessions", "-F", parse::SESSION_FORMAT])?;
        if !out.success() {
            return match classify_stderr(&out.stderr) {
                ServerError::NoServer => Ok(Vec::new()),
                _ => Err(command_failed("list-sessions", &out)),
            };
        }
        parse::parse_session_list(&out.stdout)
    }

    /// Name of the session this client is attached to.
    ///
    /// Resolved fresh on every call.
    pub fn current_session_name(&self) -> WtResult<SessionName> {
        if !self.inside_tmux {
            return Err(WtError::NotInTmux);
        }
        let out = self.exec.run(&["display-message", "-p", "#{session_name}"])?;
        if !out.success() {
            return Err(command_failed("display-message", &out));
        }
        let name = out.stdout.trim();
        if name.is_empty() {
            return Err(WtError::MalformedOutput(
                "empty session name from display-message".to_string(),
            ));
        }
        Ok(SessionName::from_server(name))
    }

    /// Resolves an optional explicit target to a concrete session name,
    /// falling back to the current session.
    pub fn resolve_session(&self, session: Option<&SessionName>) -> WtResult<SessionName> {
        match session {
            Some(name) => Ok(name.clone()),
            None => self.current_session_name(),
        }
    }

    /// Creates a window in the target session and returns its record.
    /// tmux selects the new window as part of creation.
    pub fn create_window(&self, session: Option<&SessionName>) -> WtResult<Window> {
        let name = self.resolve_session(session)?;
        let target = format!("={name}:");
        let out = self.exec.run(&[
            "new-window",
            "-t",
            &target,
            "-P",
            "-F",
            parse::WINDOW_FORMAT,
        ])?;
        if !out.success() {
            return Err(self.session_error(&name, "new-window", &out));
        }
        let window = parse::parse_window_line(first_line(&out.stdout)?)?;
        debug!(session = %name, index = window.index, "created window");
        Ok(window)
    }

    /// Makes a window the session's active window.
    pub fn goto_window(&self, session: Option<&SessionName>, index: u32) -> WtResult<()> {
        let name = self.resolve_session(session)?;
        let target = format!("={name}:{index}");
        let out = self.exec.run(&["select-window", "-t", &target])?;
        if !out.success() {
            return Err(self.window_error(&name, index, "select-window", &out));
        }
        debug!(session = %name, index, "selected window");
        Ok(())
    }

    /// Closes a window. Closing the last window of a session ends the
    /// session; the dispatcher confirms that with the user first.
    pub fn close_window(&self, session: Option<&SessionName>, index: u32) -> WtResult<()> {
        let name = self.resolve_session(session)?;
        let target = format!("={name}:{index}");
        let out = self.exec.run(&["kill-window", "-t", &target])?;
        if !out.success() {
            return Err(self.window_error(&name, index, "kill-window", &out));
        }
        debug!(session = %name, index, "closed window");
        Ok(())
    }

    /// Lists the windows of the target session.
    pub fn list_windows(&self, session: Option<&SessionName>) -> WtResult<Vec<Window>> {
        let name = self.resolve_session(session)?;
        let target = format!("={name}");
        let out = self
            .exec
            .run(&["list-windows", "-t", &target, "-F", parse::WINDOW_FORMAT])?;
        if !out.success() {
            return Err(self.session_error(&name, "list-windows", &out));
        }
        parse::parse_window_list(&out.stdout)
    }

    fn session_error(&self, name: &SessionName, command: &str, out: &TmuxOutput) -> WtError {
        match classify_stderr(&out.stderr) {
            ServerError::NoSuchSession | ServerError::NoServer => {
                WtError::SessionNotFound { name: name.clone() }
            }
            _ => command_failed(command, out),
        }
    }

    fn window_error(
        &self,
        session: &SessionName,
        index: u32,
        command: &str,
        out: &TmuxOutput,
    ) -> WtError {
        match classify_stderr(&out.stderr) {
            ServerError::NoSuchWindow => WtError::WindowNotFound {
                session: session.clone(),
                index,
            },
            ServerError::NoSuchSession | ServerError::NoServer => WtError::SessionNotFound {
                name: session.clone(),
            },
            _ => command_failed(command, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_duplicate_session() {
        assert_eq!(
            classify_stderr("duplicate session: demo\n"),
            ServerError::DuplicateSession
        );
    }

    #[test]
    fn test_classify_missing_session() {
        assert_eq!(
            classify_stderr("can't find session: ghost"),
            ServerError::NoSuchSession
        );
        assert_eq!(
            classify_stderr("session not found: ghost"),
            ServerError::NoSuchSession
        );
    }

    #[test]
    fn test_classify_missing_window() {
        assert_eq!(
            classify_stderr("can't find window: 9"),
            ServerError::NoSuchWindow
        );
    }

    #[test]
    fn test_classify_no_server() {
        assert_eq!(
            classify_stderr("no server running on /tmp/tmux-1000/default"),
            ServerError::NoServer
        );
        assert_eq!(
            classify_stderr("error connecting to /tmp/tmux-1000/default (No such file or directory)"),
            ServerError::NoServer
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify_stderr("usage: kill-window ..."), ServerError::Other);
    }

    #[test]
    fn test_command_failed_uses_stderr_when_present() {
        let out = TmuxOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "something odd\n".to_string(),
        };
        let err = command_failed("kill-window", &out);
        assert_eq!(
            err.to_string(),
            "tmux command failed: kill-window: something odd"
        );
    }

    #[test]
    fn test_command_failed_falls_back_to_exit_code() {
        let out = TmuxOutput {
            code: Some(129),
            stdout: String::new(),
            stderr: String::new(),
        };
        let err = command_failed("list-windows", &out);
        assert!(err.to_string().contains("129"));
    }

    #[test]
    fn test_first_line_rejects_empty_output() {
        assert!(first_line("").is_err());
        assert_eq!(first_line("0\t1\t1\tzsh\n").unwrap(), "0\t1\t1\tzsh");
    }
}
