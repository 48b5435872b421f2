//! The time-travel game engine.
//!
//! [`GameState`] owns every board snapshot of the game, the moves that
//! produced them, and a cursor selecting the displayed snapshot. The cursor
//! is always an absolute (chronological) history index; display order only
//! exists at the View boundary through [`GameState::to_absolute`] and
//! [`GameState::to_display`].

use super::action::{Placement, Rejection};
use super::invariants::{GameStateInvariants, InvariantSet};
use super::rules::{WinningLine, calculate_winner};
use super::{Board, Player, Position};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Text shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// The displayed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Full state of one game, including its history.
///
/// Decoding goes through `TryFrom<RawGameState>`, so a snapshot that breaks
/// [`GameStateInvariants`] is rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board snapshots; entry 0 is the empty board.
    pub(crate) history: Vec<Board>,
    /// `move_history[k - 1]` produced `history[k]`.
    pub(crate) move_history: Vec<Position>,
    /// Absolute index of the displayed snapshot.
    pub(crate) cursor: usize,
    /// Cached turn flag, equal to `cursor % 2 == 0`.
    pub(crate) x_is_next: bool,
    /// Presentation order of the move list.
    pub(crate) list_is_reversed: bool,
    /// Completed line on the displayed board, if any.
    pub(crate) winning_line: Option<WinningLine>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    move_history: Vec<Position>,
    cursor: usize,
    x_is_next: bool,
    list_is_reversed: bool,
    winning_line: Option<WinningLine>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    #[instrument(skip_all, fields(cursor = raw.cursor, snapshots = raw.history.len()))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            move_history: raw.move_history,
            cursor: raw.cursor,
            x_is_next: raw.x_is_next,
            list_is_reversed: raw.list_is_reversed,
            winning_line: raw.winning_line,
        };
        match GameStateInvariants::check_all(&state) {
            Ok(()) => Ok(state),
            Err(violations) => {
                let descriptions: Vec<&str> =
                    violations.iter().map(|v| v.description.as_str()).collect();
                warn!(?descriptions, "Rejected decoded game state");
                Err(EngineError::new(format!(
                    "Invalid game state: {}",
                    descriptions.join(", ")
                )))
            }
        }
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            move_history: Vec::new(),
            cursor: 0,
            x_is_next: true,
            list_is_reversed: false,
            winning_line: None,
        }
    }

    /// Creates a new game with the move list already in the given order.
    pub fn with_order(list_is_reversed: bool) -> Self {
        Self {
            list_is_reversed,
            ..Self::new()
        }
    }

    /// Builds a state by clicking each position in turn.
    ///
    /// Clicks the engine would ignore are skipped, as they would be in play.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Self {
        let mut state = Self::new();
        for &pos in moves {
            state.place_mark(pos);
        }
        state
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `pos`, branching from the cursor.
    ///
    /// Any snapshots after the cursor are discarded first. The click is
    /// ignored, with state untouched, when the displayed board already has a
    /// winner or the square is taken.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.current_player()))]
    pub fn place_mark(&mut self, pos: Position) -> Placement {
        let branch = self.current_board();

        if let Some(line) = calculate_winner(branch) {
            debug!(winner = %line.player(), "Placement ignored: game over");
            return Placement::Ignored(Rejection::GameOver(line.player()));
        }
        if !branch.is_empty(pos) {
            debug!("Placement ignored: square occupied");
            return Placement::Ignored(Rejection::SquareOccupied(pos));
        }

        let player = self.current_player();
        let next = branch.with_mark(pos, player);

        let discarded = self.history.len() - 1 - self.cursor;
        if discarded > 0 {
            debug!(discarded, "Branching from the past, dropping future moves");
        }
        self.history.truncate(self.cursor + 1);
        self.move_history.truncate(self.cursor);

        self.history.push(next);
        self.move_history.push(pos);
        self.set_cursor(self.history.len() - 1);

        debug!(step = self.cursor, "Mark placed");
        Placement::Placed {
            position: pos,
            player,
        }
    }

    /// Places a mark by raw cell index (0-8), as a View forwards a click.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if `index` is not a board cell.
    pub fn place_mark_at(&mut self, index: usize) -> Result<Placement, EngineError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            EngineError::cell_out_of_range(index)
        })?;
        Ok(self.place_mark(pos))
    }

    /// Moves the cursor to a move-list entry given in display order.
    ///
    /// History is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if no entry exists at `display_index`.
    #[instrument(skip(self), fields(reversed = self.list_is_reversed))]
    pub fn jump_to(&mut self, display_index: usize) -> Result<(), EngineError> {
        let absolute = self.to_absolute(display_index)?;
        self.jump_to_absolute(absolute)
    }

    /// Moves the cursor to an absolute history index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if `index` is past the end of history.
    #[instrument(skip(self))]
    pub fn jump_to_absolute(&mut self, index: usize) -> Result<(), EngineError> {
        if index >= self.history.len() {
            warn!(index, len = self.history.len(), "Jump out of range");
            return Err(EngineError::step_out_of_range(index, self.history.len()));
        }
        self.set_cursor(index);
        debug!(step = index, "Cursor moved");
        Ok(())
    }

    /// Flips the move-list order.
    ///
    /// The cursor is absolute, so the displayed board is the same before and
    /// after; its display index becomes `len - 1 - old`.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.list_is_reversed = !self.list_is_reversed;
        debug!(reversed = self.list_is_reversed, "Move list order toggled");
        self.check_invariants();
    }

    /// Single point of cursor mutation: keeps the turn flag and winning
    /// line derived from the absolute cursor.
    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.x_is_next = index % 2 == 0;
        self.winning_line = calculate_winner(&self.history[index]);
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(
            GameStateInvariants::check_all(self).is_ok(),
            "Game state invariants violated: {:?}",
            GameStateInvariants::check_all(self)
        );
    }

    // ─────────────────────────────────────────────────────────────
    //  Display-order conversion
    // ─────────────────────────────────────────────────────────────

    /// Converts a display index to an absolute history index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if `display_index` is past the end.
    pub fn to_absolute(&self, display_index: usize) -> Result<usize, EngineError> {
        let len = self.history.len();
        if display_index >= len {
            return Err(EngineError::step_out_of_range(display_index, len));
        }
        Ok(self.flip_if_reversed(display_index))
    }

    /// Converts an absolute history index to its display index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if `absolute` is past the end.
    pub fn to_display(&self, absolute: usize) -> Result<usize, EngineError> {
        let len = self.history.len();
        if absolute >= len {
            return Err(EngineError::step_out_of_range(absolute, len));
        }
        Ok(self.flip_if_reversed(absolute))
    }

    // The mapping is its own inverse; callers check bounds.
    fn flip_if_reversed(&self, index: usize) -> usize {
        if self.list_is_reversed {
            self.history.len() - 1 - index
        } else {
            index
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        match self.winning_line {
            Some(line) => Status::Winner(line.player()),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// Player whose mark the next placement uses.
    pub fn current_player(&self) -> Player {
        Player::from_turn(self.x_is_next)
    }

    /// Completed line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Whether the View should highlight `pos`.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Absolute index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display index of the displayed snapshot.
    pub fn display_cursor(&self) -> usize {
        self.flip_if_reversed(self.cursor)
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when the move list is shown newest first.
    pub fn list_is_reversed(&self) -> bool {
        self.list_is_reversed
    }

    /// All board snapshots in chronological order.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Positions played, parallel to `history()[1..]`.
    pub fn move_history(&self) -> &[Position] {
        &self.move_history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert!(state.move_history().is_empty());
        assert_eq!(state.cursor(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_place_alternates_players() {
        let mut state = GameState::new();
        state.place_mark(Position::Center);
        state.place_mark(Position::TopLeft);
        let board = state.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert!(state.x_is_next());
    }

    #[test]
    fn test_place_mark_at_rejects_bad_index() {
        let mut state = GameState::new();
        assert!(state.place_mark_at(9).is_err());
        assert_eq!(state, GameState::new());
        assert!(state.place_mark_at(8).expect("in range").is_placed());
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut state = GameState::replay(&[Position::Center]);
        let before = state.clone();
        assert!(state.jump_to(2).is_err());
        assert!(state.jump_to_absolute(7).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_display_cursor_follows_order() {
        let mut state = GameState::replay(&[Position::Center, Position::TopLeft]);
        state.jump_to(1).expect("in range");
        assert_eq!(state.display_cursor(), 1);
        state.toggle_order();
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.display_cursor(), 1);
        state.jump_to(0).expect("in range");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.display_cursor(), 0);
    }

    #[test]
    fn test_with_order_starts_reversed() {
        let state = GameState::with_order(true);
        assert!(state.list_is_reversed());
        assert_eq!(state.display_cursor(), 0);
    }
}
