//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "stickyboard", version, about = "Sticky-note boards in a local store")]
pub struct Args {
    /// SQLite file holding the board store.
    #[arg(long, env = "STICKYBOARD_DB", default_value = "stickyboard.sqlite3")]
    pub db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "STICKYBOARD_LOG_DIR")]
    pub log_dir: Option<String>,

    /// One of trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "STICKYBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Canvas size new notes are centered in, as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1280x800")]
    pub viewport: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List boards; the active one is marked with `*`.
    Boards,
    /// Create a board and switch to it.
    AddBoard,
    /// Rename a board.
    RenameBoard { board_id: String, name: String },
    /// Delete a board. The last board cannot be deleted.
    DeleteBoard { board_id: String },
    /// Make a board active.
    Switch { board_id: String },
    /// List active-board tasks, largest first.
    Tasks,
    /// Add a task to the active board.
    Add {
        text: String,
        /// Size label: XS, S, M, L or XL.
        #[arg(long, default_value = "S")]
        size: String,
    },
    /// Replace a task's text.
    Edit { task_id: String, text: String },
    /// Toggle a task's completed flag.
    Toggle { task_id: String },
    /// Set a task's background to a palette color by name or a raw value.
    Color { task_id: String, color: String },
    /// Move a task by a drag delta.
    Move {
        task_id: String,
        #[arg(allow_hyphen_values = true)]
        dx: f64,
        #[arg(allow_hyphen_values = true)]
        dy: f64,
    },
    /// Resize a task; the width snaps to the nearest size bucket.
    Resize { task_id: String, width: f64 },
    /// Delete a task.
    Delete { task_id: String },
    /// Print a task's clipboard envelope to stdout.
    Copy { task_id: String },
    /// Read a clipboard envelope from stdin and add it to the active board.
    Paste,
}
