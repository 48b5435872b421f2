//! Tic-tac-toe with a full move history and time travel.

mod action;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Intent, Placement, Rejection, reduce};
pub use move_list::{GAME_START_LABEL, MoveListEntry};
pub use position::Position;
pub use rules::{WinningLine, calculate_winner};
pub use state::{GameState, Status};
pub use types::{Board, Player, Square};
