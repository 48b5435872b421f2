//! Time-travel tic-tac-toe.
//!
//! A deterministic engine for two-player tic-tac-toe that keeps every board
//! snapshot, lets the player jump back to any of them, and branches a new
//! future when a mark is placed in the past.
//!
//! # Architecture
//!
//! - **Engine**: [`GameState`] owns history, cursor, turn and winning line
//! - **Rules**: [`calculate_winner`] over the 8 fixed lines
//! - **Intents**: [`Intent`] + [`reduce`] for immutable-update callers
//! - **Config**: [`AppConfig`] for the terminal front end
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.place_mark(Position::Center);
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
pub mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GAME_START_LABEL, GameState, Intent, MoveListEntry, Placement, Player, Position,
    Rejection, Square, Status, WinningLine, calculate_winner, reduce,
};
