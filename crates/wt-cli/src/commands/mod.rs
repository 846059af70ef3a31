//! Dispatch from parsed arguments to adapter operations.

pub mod session;
pub mod window;

use wt_core::{SessionName, WtResult};
use wt_tmux::{TmuxClient, TmuxExecutor};

use crate::args::{Cli, Command};

/// Routes a parsed invocation to the matching handler.
pub fn dispatch<E: TmuxExecutor>(cli: Cli, client: &TmuxClient<E>) -> WtResult<()> {
    match cli.command {
        Command::Session { action } => session::run(action, client),
        Command::Window { action } => window::run(action, client),
    }
}

/// Validates an optional explicit session target.
pub(crate) fn parse_session(raw: Option<String>) -> WtResult<Option<SessionName>> {
    raw.map(SessionName::new).transpose()
}
