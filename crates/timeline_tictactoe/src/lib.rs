//! Tic-tac-toe with a browsable move history.
//!
//! The crate is pure game logic with no I/O:
//!
//! - **Types**: players, squares, immutable boards and cell positions
//! - **Rules**: the board evaluator (win, draw, in progress)
//! - **Game**: [`TimelineGame`], the history of snapshots and the current position
//! - **View**: status line, cell highlights and history labels for a front end
//! - **Invariants**: checkable properties every history must satisfy
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Outcome, Player, Position, TimelineGame};
//!
//! let mut game = TimelineGame::new();
//! game.play(Position::TopLeft);
//! game.play(Position::Center);
//! assert_eq!(game.to_move(), Player::X);
//!
//! // Go back to the start and take a different branch.
//! game.jump_to(0);
//! game.play(Position::BottomRight);
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use game::{
    HistoryError, IgnoreReason, PlayResult, SortOrder, TimelineError, TimelineGame,
};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, BoardParseError, Location, Player, Snapshot, Square};
pub use view::{CellView, HistoryEntry, Status, cell_views, history_entries, status};
