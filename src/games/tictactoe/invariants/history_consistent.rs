//! History consistency invariant: snapshots and moves agree.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: each snapshot is its predecessor plus exactly one new mark.
///
/// - `move_history.len() == history.len() - 1`
/// - `history[0]` is the empty board
/// - `history[k]` differs from `history[k - 1]` only at `move_history[k - 1]`,
///   which was empty before and holds the mark of the player on turn `k - 1`
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = &state.history;
        let moves = &state.move_history;

        if history.is_empty() || moves.len() != history.len() - 1 {
            return false;
        }
        if history[0].occupied_count() != 0 {
            return false;
        }

        history.windows(2).zip(moves).enumerate().all(|(k, (pair, &pos))| {
            let (before, after) = (&pair[0], &pair[1]);
            let expected = Player::from_turn(k % 2 == 0);
            before.get(pos) == Square::Empty
                && after.get(pos) == Square::Occupied(expected)
                && after.occupied_count() == before.occupied_count() + 1
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly the recorded move"
    }
}
