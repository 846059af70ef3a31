//! Process-level access to the tmux binary.

use std::io;
use std::process::{Command, Stdio};

use tracing::trace;

/// Environment variable naming the tmux binary to invoke.
///
/// Defaults to `tmux` on `$PATH`.
pub const TMUX_BIN_ENV: &str = "WT_TMUX_BIN";

/// Captured result of one tmux exchange.
#[derive(Debug, Clone)]
pub struct TmuxOutput {
    /// Process exit code; `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TmuxOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Seam between the client and the tmux process.
///
/// `run` captures output for request/response exchanges. `run_inherit`
/// hands the terminal to tmux for commands that must own the tty
/// (attach-session); it reports only whether tmux exited cleanly.
pub trait TmuxExecutor {
    fn run(&self, args: &[&str]) -> io::Result<TmuxOutput>;

    fn run_inherit(&self, args: &[&str]) -> io::Result<bool>;
}

/// Executor backed by the real tmux binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTmux;

impl SystemTmux {
    fn binary() -> String {
        std::env::var(TMUX_BIN_ENV).unwrap_or_else(|_| "tmux".to_string())
    }
}

impl TmuxExecutor for SystemTmux {
    fn run(&self, args: &[&str]) -> io::Result<TmuxOutput> {
        trace!(?args, "running tmux");
        let output = Command::new(Self::binary()).args(args).output()?;
        Ok(TmuxOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_inherit(&self, args: &[&str]) -> io::Result<bool> {
        trace!(?args, "running tmux with inherited tty");
        let status = Command::new(Self::binary())
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_success_requires_zero_exit() {
        let ok = TmuxOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());

        let failed = TmuxOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!failed.success());

        let signalled = TmuxOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!signalled.success());
    }
}
