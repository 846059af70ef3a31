//! Core domain types for wt-tools.
//!
//! Sessions and windows are plain value records parsed from a single
//! control exchange with the tmux server. Nothing here holds a live
//! handle: every mutation is a fresh request, so records cannot go
//! stale behind the caller's back.

pub mod error;
pub mod session;
pub mod window;

pub use error::{WtError, WtResult};
pub use session::{Session, SessionName};
pub use window::Window;
