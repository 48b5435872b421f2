//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A caller passed an index outside the range the engine can address.
///
/// Rejected moves are not errors (see [`Rejection`](crate::Rejection)); this
/// type only covers broken View contracts, such as a cell index past 8 or a
/// move-list entry that does not exist, and decoded snapshots that fail the
/// state invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Engine error: {} at {}:{}", message, file, line)]
pub struct EngineError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// A cell index past the end of the board.
    #[track_caller]
    pub fn cell_out_of_range(index: usize) -> Self {
        Self::new(format!("Cell index {} out of range (must be 0-8)", index))
    }

    /// A history index past the end of the move list.
    #[track_caller]
    pub fn step_out_of_range(index: usize, len: usize) -> Self {
        Self::new(format!(
            "History index {} out of range (history has {} entries)",
            index, len
        ))
    }
}
