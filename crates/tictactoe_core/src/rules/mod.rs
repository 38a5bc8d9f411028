//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the game aggregate so they can be checked on any move list.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};
