//! Turn parity invariant: the cached turn flag follows the cursor.

use super::super::GameState;
use super::Invariant;

/// Invariant: `x_is_next == (cursor is even)`.
///
/// X always opens, so the snapshot after an even number of marks is X's turn
/// regardless of how the cursor got there.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next == (state.cursor % 2 == 0)
    }

    fn description() -> &'static str {
        "Turn flag matches cursor parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_holds_after_jumps_in_both_orders() {
        let mut game = GameState::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
        ]);
        for display in 0..4 {
            game.jump_to(display).expect("in range");
            assert!(TurnParityInvariant::holds(&game));
        }
        game.toggle_order();
        for display in 0..4 {
            game.jump_to(display).expect("in range");
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_stale_flag_violates() {
        let mut game = GameState::replay(&[Position::Center]);
        game.x_is_next = true;
        assert!(!TurnParityInvariant::holds(&game));
    }
}
