//! Winning line invariant: the cached line matches the displayed board.

use super::super::GameState;
use super::super::rules::calculate_winner;
use super::Invariant;

/// Invariant: `winning_line == calculate_winner(current_board())`.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .get(state.cursor)
            .is_some_and(|board| calculate_winner(board) == state.winning_line)
    }

    fn description() -> &'static str {
        "Winning line matches the displayed board"
    }
}
