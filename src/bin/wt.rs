//! wt - tmux session and window management from the command line.
//!
//! # Usage
//!
//! ```text
//! wt session new demo     # create a session and attach to it
//! wt session list         # list sessions
//! wt window new           # open a window in the current session
//! wt window goto 2        # jump to window 2
//! ```
//!
//! Exit codes: 0 success, 1 usage or validation error, 2 operation
//! failure (for example the target session does not exist).

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wt_cli::{dispatch, Cli};
use wt_tmux::TmuxClient;

const USAGE_EXIT: u8 = 1;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "wt_cli=debug,wt_tmux=debug,wt_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so stdout stays clean for listings.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not usage errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => USAGE_EXIT,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);
    debug!(verbose = cli.verbose, "wt starting");

    let client = TmuxClient::new();
    match dispatch(cli, &client) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wt: {err}");
            let code = err.exit_code();
            if code == USAGE_EXIT {
                eprintln!("Run 'wt --help' for usage.");
            }
            ExitCode::from(code)
        }
    }
}
