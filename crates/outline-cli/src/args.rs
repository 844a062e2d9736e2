use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{StepCommands, TaskCommands};

/// Main command-line interface for the Outline wizard
///
/// Outline walks a product idea through a four-step requirements worksheet:
/// brainstorm, user perspective, usage scenario, and peer review. Steps
/// complete automatically as their fields are filled in, so the worksheet is
/// always an honest reflection of the written content.
#[derive(Parser)]
#[command(version, about, name = "ol")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/outline/outline.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Outline CLI
///
/// The CLI is organized into two main command categories:
/// - `task`: Operations for managing tasks (create, list, rename, export, etc.)
/// - `step`: Operations for filling in a task's four-step worksheet
///
/// Running with no command lists all tasks.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Work on a task's step worksheet
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}
