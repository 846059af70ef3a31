//! Parsing of tmux `-F` formatted listings.
//!
//! Listings use tab-separated fields. The free-form name field always
//! comes last so a tab inside it cannot shift the numeric columns.

use chrono::DateTime;
use wt_core::{Session, SessionName, Window, WtError, WtResult};

/// Listing format for `list-sessions` and `new-session -P`.
pub const SESSION_FORMAT: &str =
    "#{session_attached}\t#{session_windows}\t#{session_created}\t#{session_name}";

/// Listing format for `list-windows` and `new-window -P`.
pub const WINDOW_FORMAT: &str =
    "#{window_index}\t#{window_active}\t#{window_panes}\t#{window_name}";

/// Parses one line of [`SESSION_FORMAT`] output.
pub fn parse_session_line(line: &str) -> WtResult<Session> {
    let mut fields = line.splitn(4, '\t');
    let attached = next_field(&mut fields, line)?;
    let windows = next_field(&mut fields, line)?;
    let created = next_field(&mut fields, line)?;
    let name = next_field(&mut fields, line)?;

    Ok(Session {
        name: SessionName::from_server(name),
        // session_attached counts attached clients.
        attached: parse_u32("session_attached", attached, line)? > 0,
        windows: parse_u32("session_windows", windows, line)?,
        created: created
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
    })
}

/// Parses one line of [`WINDOW_FORMAT`] output.
pub fn parse_window_line(line: &str) -> WtResult<Window> {
    let mut fields = line.splitn(4, '\t');
    let index = next_field(&mut fields, line)?;
    let active = next_field(&mut fields, line)?;
    let panes = next_field(&mut fields, line)?;
    let name = next_field(&mut fields, line)?;

    Ok(Window {
        index: parse_u32("window_index", index, line)?,
        active: parse_u32("window_active", active, line)? != 0,
        panes: parse_u32("window_panes", panes, line)?,
        name: name.to_string(),
    })
}

/// Parses a whole `list-sessions` response.
pub fn parse_session_list(stdout: &str) -> WtResult<Vec<Session>> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_session_line)
        .collect()
}

/// Parses a whole `list-windows` response.
pub fn parse_window_list(stdout: &str) -> WtResult<Vec<Window>> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_window_line)
        .collect()
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: &str,
) -> WtResult<&'a str> {
    fields
        .next()
        .ok_or_else(|| WtError::MalformedOutput(format!("truncated listing line: {line:?}")))
}

fn parse_u32(field: &str, value: &str, line: &str) -> WtResult<u32> {
    value.parse().map_err(|_| {
        WtError::MalformedOutput(format!("bad {field} value {value:?} in line {line:?}"))
    })
}
