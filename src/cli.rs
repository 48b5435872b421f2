//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};

/// Time-travel tic-tac-toe - play, rewind, and branch
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list newest first
        #[arg(long)]
        reversed: bool,
    },

    /// Replay cell clicks (0-8) and print the resulting game
    Replay {
        /// Cell indices clicked in order, row-major from 0
        moves: Vec<usize>,

        /// Move-list entry (display order) to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,
    },
}
