//! Command dispatcher for the `wt` binary.
//!
//! Validates arguments, delegates to the control adapter in `wt-tmux`,
//! and renders results. Validation failures never reach the adapter.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Command, SessionAction, WindowAction};
pub use commands::dispatch;
