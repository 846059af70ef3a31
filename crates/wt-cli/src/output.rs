//! Rendering helpers shared by the subcommands.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use wt_core::WtResult;

/// Marker used in listings: filled for attached/active, hollow otherwise.
#[must_use]
pub fn status_marker(on: bool) -> &'static str {
    if on {
        "●"
    } else {
        "○"
    }
}

/// Formats a session creation time, or "unknown" when the server did
/// not report one.
#[must_use]
pub fn format_created(created: Option<DateTime<Utc>>) -> String {
    created
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Picks "window" or "windows" for a count.
#[must_use]
pub fn window_label(count: u32) -> &'static str {
    if count == 1 {
        "window"
    } else {
        "windows"
    }
}

/// Asks a y/N question and reads one line from stdin.
///
/// Anything other than `y` (case-insensitive) declines.
pub fn confirm(question: &str) -> WtResult<bool> {
    print!("{question} (y/N): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
