//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with time travel through the move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply moves headlessly and print the resulting position
    Replay {
        /// Moves to apply, as board indices (0-8) or labels like "center"
        moves: Vec<String>,

        /// Jump to this move number after applying the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
