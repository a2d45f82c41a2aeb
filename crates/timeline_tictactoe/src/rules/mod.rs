//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here
//! knows about history or whose turn it is.

pub mod draw;
mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, check_winner};
