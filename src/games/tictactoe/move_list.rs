//! Move-list projection of the history.

use super::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label of the entry for the empty board.
pub const GAME_START_LABEL: &str = "Game start";

/// One row of the move list, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// 0-based position in the displayed list; pass to `jump_to`.
    display_position: usize,
    /// Chronological history index this entry shows.
    absolute_index: usize,
    /// 1-based number in display order.
    move_number: usize,
    /// "Game start" or "Position (row, col)".
    label: String,
    /// Whether this entry is the displayed board.
    is_current: bool,
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.move_number, self.label)
    }
}

impl GameState {
    /// Label for an absolute history index.
    ///
    /// Returns `None` past the end of history.
    pub fn step_label(&self, absolute: usize) -> Option<String> {
        (absolute < self.history.len()).then(|| self.label_for(absolute))
    }

    // `move_history[k - 1]` exists for every history index `k > 0`.
    fn label_for(&self, absolute: usize) -> String {
        match absolute {
            0 => GAME_START_LABEL.to_string(),
            k => format!("Position {}", self.move_history[k - 1]),
        }
    }

    /// The move list in display order, one entry per history snapshot.
    #[instrument(level = "trace", skip(self))]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let len = self.history.len();
        (0..len)
            .map(|display_position| {
                let absolute_index = if self.list_is_reversed {
                    len - 1 - display_position
                } else {
                    display_position
                };
                MoveListEntry {
                    display_position,
                    absolute_index,
                    move_number: display_position + 1,
                    label: self.label_for(absolute_index),
                    is_current: absolute_index == self.cursor,
                }
            })
            .collect()
    }
}
