use clap::{Parser, Subcommand};

/// wt - tmux session and window management utilities.
#[derive(Parser, Debug)]
#[command(name = "wt")]
#[command(version, about = "Tmux session and window management utilities")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Session management commands
    #[command(visible_alias = "s")]
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Window management commands
    #[command(visible_alias = "w")]
    Window {
        #[command(subcommand)]
        action: WindowAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Create a new session and attach to it
    #[command(visible_alias = "n")]
    New {
        /// Session name
        name: String,
    },

    /// Attach to an existing session
    #[command(visible_alias = "a")]
    Attach {
        /// Session name
        name: String,
    },

    /// List sessions
    #[command(visible_alias = "ls")]
    List {
        /// Show every window under each session
        #[arg(short, long)]
        detailed: bool,
    },

    /// Kill a session
    #[command(visible_alias = "k")]
    Kill {
        /// Session name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Kill all sessions, optionally keeping one
    KillAll {
        /// Session name to keep
        #[arg(short = 'e', long = "except", value_name = "NAME")]
        except: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum WindowAction {
    /// Create a new window
    #[command(visible_alias = "n")]
    New {
        /// Target session (defaults to the current one)
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Go to a window by index
    #[command(visible_alias = "g")]
    Goto {
        /// Window index
        index: u32,

        /// Target session (defaults to the current one)
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Close a window (the active one if no index is given)
    #[command(visible_alias = "c")]
    Close {
        /// Window index
        index: Option<u32>,

        /// Target session (defaults to the current one)
        #[arg(short, long)]
        session: Option<String>,

        /// Skip the last-window confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List windows in a session
    #[command(visible_alias = "ls")]
    List {
        /// Target session (defaults to the current one)
        #[arg(short, long)]
        session: Option<String>,
    },
}
