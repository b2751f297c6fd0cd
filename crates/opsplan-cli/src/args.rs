use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Main command-line interface for the opsplan execution board
///
/// Opsplan manages operational intervention plans for a running system:
/// plans group ordered tasks, tasks group discrete actions, and the board
/// tracks each plan from draft through execution to a recorded outcome,
/// including handing unfinished work to the next shift.
#[derive(Parser)]
#[command(version, about, name = "opsplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/opsplan/opsplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the opsplan CLI
///
/// The CLI is organized into two command categories:
/// - `plan`: lifecycle operations on whole plans (create, execute, stop,
///   complete, ...)
/// - `task`: operations on tasks and their actions within a plan
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within plans
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
