//! Session subcommands.

use tracing::debug;
use wt_core::{Session, SessionName, WtError, WtResult};
use wt_tmux::{TmuxClient, TmuxExecutor};

use crate::args::SessionAction;
use crate::output::{confirm, format_created, status_marker, window_label};

pub fn run<E: TmuxExecutor>(action: SessionAction, client: &TmuxClient<E>) -> WtResult<()> {
    match action {
        SessionAction::New { name } => new(client, &name),
        SessionAction::Attach { name } => attach(client, &name),
        SessionAction::List { detailed } => list(client, detailed),
        SessionAction::Kill { name, force } => kill(client, &name, force),
        SessionAction::KillAll { except, force } => kill_all(client, except, force),
    }
}

fn new<E: TmuxExecutor>(client: &TmuxClient<E>, raw: &str) -> WtResult<()> {
    let name = SessionName::new(raw)?;
    let session = client.create_session(&name)?;
    println!("Created session '{}'", session.name);
    client.attach_session(&name)
}

fn attach<E: TmuxExecutor>(client: &TmuxClient<E>, raw: &str) -> WtResult<()> {
    let name = SessionName::new(raw)?;
    client.attach_session(&name).map_err(|err| {
        if matches!(err, WtError::SessionNotFound { .. }) {
            print_available_sessions(client);
        }
        err
    })
}

fn list<E: TmuxExecutor>(client: &TmuxClient<E>, detailed: bool) -> WtResult<()> {
    let sessions = client.list_sessions()?;
    debug!(count = sessions.len(), "listed sessions");

    if sessions.is_empty() {
        println!("No tmux sessions found");
        return Ok(());
    }

    if detailed {
        list_detailed(client, &sessions)
    } else {
        println!("Available tmux sessions:");
        for session in &sessions {
            println!(
                "  {} {} ({} {}, created: {})",
                status_marker(session.attached),
                session.name,
                session.windows,
                window_label(session.windows),
                format_created(session.created),
            );
        }
        Ok(())
    }
}

fn list_detailed<E: TmuxExecutor>(client: &TmuxClient<E>, sessions: &[Session]) -> WtResult<()> {
    for session in sessions {
        let status = if session.attached { "attached" } else { "detached" };
        println!("{} {} - {status}", status_marker(session.attached), session.name);
        println!("  Windows: {}", session.windows);

        let windows = client.list_windows(Some(&session.name))?;
        for window in &windows {
            println!(
                "    {} {}: {}",
                status_marker(window.active),
                window.index,
                window.name
            );
        }
        println!();
    }
    Ok(())
}

fn kill<E: TmuxExecutor>(client: &TmuxClient<E>, raw: &str, force: bool) -> WtResult<()> {
    let name = SessionName::new(raw)?;
    let sessions = client.list_sessions()?;
    let Some(session) = sessions.iter().find(|s| s.name == name) else {
        print_sessions(&sessions);
        return Err(WtError::SessionNotFound { name });
    };

    if session.attached && !force {
        println!("Warning: session '{name}' is currently attached.");
        if !confirm("Are you sure you want to kill it?")? {
            println!("Session kill cancelled");
            return Ok(());
        }
    }

    client.kill_session(&name)?;
    println!("Killed session '{name}'");
    Ok(())
}

fn kill_all<E: TmuxExecutor>(
    client: &TmuxClient<E>,
    except: Option<String>,
    force: bool,
) -> WtResult<()> {
    let except = super::parse_session(except)?;
    let sessions = client.list_sessions()?;

    if sessions.is_empty() {
        println!("No tmux sessions found");
        return Ok(());
    }

    let targets: Vec<&Session> = sessions
        .iter()
        .filter(|s| except.as_ref() != Some(&s.name))
        .collect();

    if targets.is_empty() {
        if let Some(kept) = &except {
            println!("No sessions to kill (keeping '{kept}')");
        }
        return Ok(());
    }

    println!("Will kill {} session(s):", targets.len());
    for session in &targets {
        let suffix = if session.attached { " (attached)" } else { "" };
        println!("  - {}{suffix}", session.name);
    }

    if !force && !confirm("Are you sure?")? {
        println!("Session kill cancelled");
        return Ok(());
    }

    let mut killed = 0;
    for session in &targets {
        match client.kill_session(&session.name) {
            Ok(()) => {
                killed += 1;
                println!("Killed session '{}'", session.name);
            }
            Err(err) => eprintln!("wt: failed to kill session '{}': {err}", session.name),
        }
    }

    match &except {
        Some(kept) => println!("Killed {killed} sessions, kept '{kept}'"),
        None => println!("Killed {killed} sessions"),
    }
    Ok(())
}

fn print_available_sessions<E: TmuxExecutor>(client: &TmuxClient<E>) {
    if let Ok(sessions) = client.list_sessions() {
        print_sessions(&sessions);
    }
}

fn print_sessions(sessions: &[Session]) {
    if sessions.is_empty() {
        return;
    }
    eprintln!("Available sessions:");
    for session in sessions {
        eprintln!("  - {}", session.name);
    }
}
