//! Non-interactive view: replays clicks and prints the game to stdout.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use time_travel_tictactoe::{GameState, Placement};
use tracing::{info, instrument, warn};

/// Replays `moves` as cell clicks, optionally jumps, and renders the result.
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn run_replay(moves: &[usize], jump: Option<usize>, reversed: bool) -> Result<String> {
    let mut game = GameState::with_order(reversed);

    for &index in moves {
        match game
            .place_mark_at(index)
            .with_context(|| format!("Invalid move {}", index))?
        {
            Placement::Placed { position, player } => {
                info!(%player, %position, "Replayed move");
            }
            Placement::Ignored(reason) => {
                warn!(index, %reason, "Replayed click ignored");
            }
        }
    }

    if let Some(display_index) = jump {
        game.jump_to(display_index)
            .with_context(|| format!("Cannot jump to move-list entry {}", display_index))?;
    }

    Ok(render(&game)?)
}

/// Renders board, status and move list as plain text.
pub fn render(game: &GameState) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", game.current_board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;
    if let Some(line) = game.winning_line() {
        let cells: Vec<String> = line.cells().iter().map(|p| p.to_string()).collect();
        writeln!(out, "Winning line: {}", cells.join(" "))?;
    }
    let order = if game.list_is_reversed() {
        "newest first"
    } else {
        "oldest first"
    };
    writeln!(out, "Order: {}", order)?;
    for entry in game.move_list() {
        let marker = if *entry.is_current() { ">" } else { " " };
        writeln!(out, "{} {}", marker, entry)?;
    }
    Ok(out)
}
