//! First-class intents and their outcomes.
//!
//! A View never mutates the engine directly: it forwards one [`Intent`] per
//! user gesture. [`reduce`] applies an intent to a state snapshot and returns
//! the next snapshot, leaving the input untouched.

use super::{GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A user gesture forwarded by the View.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A click on a board cell.
    PlaceMark(Position),
    /// A click on a move-list entry, in display order.
    JumpTo(usize),
    /// A click on the order toggle.
    ToggleOrder,
}

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Placement {
    /// The mark was placed and history advanced.
    #[display("{} played {}", player, position)]
    Placed {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        player: Player,
    },
    /// The click was ignored; state is unchanged.
    #[display("Ignored: {}", _0)]
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the state changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The displayed board already has a winner.
    #[display("{} has already won", _0)]
    GameOver(Player),
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Applies `intent` to a copy of `state` and returns the copy.
///
/// Ignored placements and out-of-range jumps return a state equal to the
/// input.
#[instrument(skip(state))]
pub fn reduce(state: &GameState, intent: Intent) -> GameState {
    let mut next = state.clone();
    match intent {
        Intent::PlaceMark(position) => {
            next.place_mark(position);
        }
        Intent::JumpTo(display_index) => {
            if let Err(e) = next.jump_to(display_index) {
                warn!(error = %e, "Jump intent ignored");
            }
        }
        Intent::ToggleOrder => next.toggle_order(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let start = GameState::new();
        let next = reduce(&start, Intent::PlaceMark(Position::Center));
        assert_eq!(start, GameState::new());
        assert_eq!(next.history().len(), 2);
    }

    #[test]
    fn test_reduce_out_of_range_jump_is_identity() {
        let start = GameState::new();
        let next = reduce(&start, Intent::JumpTo(5));
        assert_eq!(next, start);
    }

    #[test]
    fn test_reduce_chain() {
        let intents = [
            Intent::PlaceMark(Position::TopLeft),
            Intent::PlaceMark(Position::Center),
            Intent::ToggleOrder,
            Intent::JumpTo(2),
        ];
        let state = intents
            .into_iter()
            .fold(GameState::new(), |state, intent| reduce(&state, intent));
        // Reversed list of 3 entries: display 2 is absolute 0.
        assert_eq!(state.cursor(), 0);
        assert!(state.list_is_reversed());
        assert!(state.x_is_next());
    }

    #[test]
    fn test_placement_display() {
        let placed = Placement::Placed {
            position: Position::Center,
            player: Player::X,
        };
        assert_eq!(placed.to_string(), "X played (2, 2)");
        let ignored = Placement::Ignored(Rejection::GameOver(Player::O));
        assert_eq!(ignored.to_string(), "Ignored: O has already won");
    }
}
