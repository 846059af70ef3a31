//! Window subcommands.

use tracing::debug;
use wt_core::{SessionName, Window, WtError, WtResult};
use wt_tmux::{TmuxClient, TmuxExecutor};

use crate::args::WindowAction;
use crate::output::{confirm, status_marker};

pub fn run<E: TmuxExecutor>(action: WindowAction, client: &TmuxClient<E>) -> WtResult<()> {
    match action {
        WindowAction::New { session } => new(client, session),
        WindowAction::Goto { index, session } => goto(client, index, session),
        WindowAction::Close {
            index,
            session,
            force,
        } => close(client, index, session, force),
        WindowAction::List { session } => list(client, session),
    }
}

fn new<E: TmuxExecutor>(client: &TmuxClient<E>, session: Option<String>) -> WtResult<()> {
    let session = super::parse_session(session)?;
    let window = client.create_window(session.as_ref())?;
    println!(
        "Created and switched to new window '{}' (index: {})",
        window.name, window.index
    );
    Ok(())
}

fn goto<E: TmuxExecutor>(
    client: &TmuxClient<E>,
    index: u32,
    session: Option<String>,
) -> WtResult<()> {
    let session = super::parse_session(session)?;
    match client.goto_window(session.as_ref(), index) {
        Ok(()) => {
            println!("Switched to window {index}");
            Ok(())
        }
        Err(err) => {
            if matches!(err, WtError::WindowNotFound { .. }) {
                print_available_windows(client, session.as_ref());
            }
            Err(err)
        }
    }
}

fn close<E: TmuxExecutor>(
    client: &TmuxClient<E>,
    index: Option<u32>,
    session: Option<String>,
    force: bool,
) -> WtResult<()> {
    let session = super::parse_session(session)?;
    let name = client.resolve_session(session.as_ref())?;
    let windows = client.list_windows(Some(&name))?;
    let target = find_target(&windows, &name, index)?;
    debug!(session = %name, index = target.index, "closing window");

    if windows.len() == 1 {
        println!("This is the last window. Closing will end the session.");
        if !force && !confirm("Continue?")? {
            println!("Window close cancelled");
            return Ok(());
        }
    }

    client.close_window(Some(&name), target.index)?;
    println!("Closed window {}: {}", target.index, target.name);
    Ok(())
}

fn list<E: TmuxExecutor>(client: &TmuxClient<E>, session: Option<String>) -> WtResult<()> {
    let session = super::parse_session(session)?;
    let name = client.resolve_session(session.as_ref())?;
    let windows = client.list_windows(Some(&name))?;

    println!("Windows in session '{name}':");
    for window in &windows {
        println!(
            "  {} {}: {}",
            status_marker(window.active),
            window.index,
            window.name
        );
    }
    Ok(())
}

/// Picks the window to close: the given index, or the active window
/// when none was given.
fn find_target(windows: &[Window], session: &SessionName, index: Option<u32>) -> WtResult<Window> {
    match index {
        Some(index) => windows
            .iter()
            .find(|w| w.index == index)
            .cloned()
            .ok_or_else(|| WtError::WindowNotFound {
                session: session.clone(),
                index,
            }),
        None => windows
            .iter()
            .find(|w| w.active)
            .cloned()
            .ok_or_else(|| WtError::MalformedOutput("no active window reported".to_string())),
    }
}

fn print_available_windows<E: TmuxExecutor>(client: &TmuxClient<E>, session: Option<&SessionName>) {
    if let Ok(windows) = client.list_windows(session) {
        if windows.is_empty() {
            return;
        }
        eprintln!("Available windows:");
        for window in &windows {
            eprintln!("  {}: {}", window.index, window.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(index: u32, active: bool) -> Window {
        Window {
            index,
            name: format!("win{index}"),
            active,
            panes: 1,
        }
    }

    fn session() -> SessionName {
        SessionName::new("demo").unwrap()
    }

    #[test]
    fn test_find_target_by_index() {
        let windows = vec![window(0, true), window(2, false)];
        let target = find_target(&windows, &session(), Some(2)).unwrap();
        assert_eq!(target.index, 2);
    }

    #[test]
    fn test_find_target_missing_index() {
        let windows = vec![window(0, true)];
        let err = find_target(&windows, &session(), Some(9)).unwrap_err();
        assert!(matches!(err, WtError::WindowNotFound { index: 9, .. }));
    }

    #[test]
    fn test_find_target_defaults_to_active() {
        let windows = vec![window(0, false), window(1, true)];
        let target = find_target(&windows, &session(), None).unwrap();
        assert_eq!(target.index, 1);
    }

    #[test]
    fn test_find_target_without_active_window() {
        let windows = vec![window(0, false)];
        let err = find_target(&windows, &session(), None).unwrap_err();
        assert!(matches!(err, WtError::MalformedOutput(_)));
    }
}
