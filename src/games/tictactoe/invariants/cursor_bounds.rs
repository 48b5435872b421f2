//! Cursor bounds invariant: the cursor selects an existing snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.cursor < state.history.len()
    }

    fn description() -> &'static str {
        "Cursor points inside history"
    }
}
