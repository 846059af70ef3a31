//! Control adapter for a running tmux server.
//!
//! Each operation issues one tmux command and parses its `-F` formatted,
//! tab-delimited response into the value records from `wt-core`. There
//! is no retry logic: creates are not safe to re-issue blindly, so
//! failures surface directly to the caller.

pub mod client;
pub mod exec;
pub mod parse;

pub use client::TmuxClient;
pub use exec::{SystemTmux, TmuxExecutor, TmuxOutput};
