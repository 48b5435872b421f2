//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules are kept apart
//! from the history engine so every board snapshot can be judged on its own.

pub mod win;

pub use win::{LINES, WinningLine, calculate_winner};
