//! Time-travel tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use time_travel_tictactoe::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play { reversed: false }) {
        Command::Play { reversed } => {
            let config = if reversed {
                config.with_start_reversed(true)
            } else {
                config
            };
            tui::run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            reversed,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();

            info!(moves = moves.len(), "Replaying game");
            let output = replay::run_replay(&moves, jump, reversed || *config.start_reversed())?;
            print!("{}", output);
            Ok(())
        }
    }
}
