//! Application state and logic.

use crossterm::event::KeyCode;
use time_travel_tictactoe::{GameState, Intent, Placement, Position};
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor, move_selection};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    MoveList,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameState,
    board_cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(start_reversed: bool) -> Self {
        Self {
            game: GameState::with_order(start_reversed),
            board_cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Arrows/1-9 to play, Tab for history, o to reorder, q to quit".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the board cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last feedback line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translates one key press into engine intents.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.display_cursor();
            }
            KeyCode::Char('o') => self.dispatch(Intent::ToggleOrder),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.board_cursor = pos;
                    self.dispatch(Intent::PlaceMark(pos));
                    return Control::Continue;
                }
                match (self.focus, code) {
                    (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                        self.dispatch(Intent::PlaceMark(self.board_cursor));
                    }
                    (Focus::Board, _) => {
                        self.board_cursor = move_cursor(self.board_cursor, code);
                    }
                    (Focus::MoveList, KeyCode::Enter | KeyCode::Char(' ')) => {
                        self.dispatch(Intent::JumpTo(self.selected));
                    }
                    (Focus::MoveList, _) => {
                        let len = self.game.history().len();
                        self.selected = move_selection(self.selected, len, code);
                    }
                }
            }
        }
        Control::Continue
    }

    /// Forwards an intent to the engine and records feedback.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::PlaceMark(pos) => {
                let placement = self.game.place_mark(pos);
                debug!(%placement, "Placement handled");
                if let Placement::Ignored(reason) = placement {
                    self.message = reason.to_string();
                } else {
                    self.message = placement.to_string();
                }
                self.selected = self.game.display_cursor();
            }
            Intent::JumpTo(display_index) => match self.game.jump_to(display_index) {
                Ok(()) => {
                    self.selected = display_index;
                    self.message = match self.game.step_label(self.game.cursor()) {
                        Some(label) => format!("Jumped to {}", label),
                        None => "Jumped".to_string(),
                    };
                }
                Err(e) => {
                    warn!(error = %e, "Jump failed");
                    self.message = "No such move".to_string();
                }
            },
            Intent::ToggleOrder => {
                self.game.toggle_order();
                // Keep the selection on the same history entry.
                let last = self.game.history().len() - 1;
                self.selected = last - self.selected.min(last);
                self.message = if self.game.list_is_reversed() {
                    "Move list: newest first".to_string()
                } else {
                    "Move list: oldest first".to_string()
                };
            }
        }
    }
}
