//! Presentation logic: what a front end shows for a game.
//!
//! Everything here is derived from a [`TimelineGame`] on demand.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Outcome, Player, Position, Square, TimelineGame};

/// The status line above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Status {
    /// The current board has a winner.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The current board is full with no winner.
    #[display("The game is a draw")]
    Draw,
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Derives the status line for the current snapshot.
pub fn status(game: &TimelineGame) -> Status {
    match game.outcome() {
        Outcome::Winner { player, .. } => Status::Winner(player),
        Outcome::Draw => Status::Draw,
        Outcome::InProgress => Status::NextPlayer(game.to_move()),
    }
}

/// One cell as a front end draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell.
    pub position: Position,
    /// What it holds.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// The nine cells of the current board, in index order.
pub fn cell_views(game: &TimelineGame) -> [CellView; 9] {
    let outcome = game.outcome();
    let board = *game.current().board();
    Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        highlighted: outcome.highlights(position),
    })
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History index this entry stands for.
    pub index: usize,
    /// Text to show.
    pub label: String,
    /// True for the snapshot currently shown; such entries are not jump targets.
    pub is_current: bool,
}

impl HistoryEntry {
    /// True if selecting this entry should jump to it.
    pub fn is_jumpable(&self) -> bool {
        !self.is_current
    }
}

fn label(game: &TimelineGame, index: usize) -> String {
    let is_current = index == game.current_index();
    match (*game.history()[index].location(), is_current) {
        (None, false) => "Go to game start".to_string(),
        (None, true) => "You are at the game start".to_string(),
        (Some(location), false) => format!("Go to move #{index} {location}"),
        (Some(location), true) => format!("You are at move #{index} {location}"),
    }
}

/// The history list in display order.
///
/// Built ascending by index, then reversed when the game prefers
/// descending order.
pub fn history_entries(game: &TimelineGame) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = (0..game.history().len())
        .map(|index| HistoryEntry {
            index,
            label: label(game, index),
            is_current: index == game.current_index(),
        })
        .collect();
    if !game.sort_order().is_ascending() {
        entries.reverse();
    }
    entries
}
