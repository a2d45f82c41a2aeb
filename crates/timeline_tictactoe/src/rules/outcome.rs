//! The board evaluator.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{draw::is_full, win::check_winner};
use crate::{Board, Player, Position};

/// What a board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A player completed a line.
    Winner {
        /// The player owning the line.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board is full and nobody won.
    Draw,
}

impl Outcome {
    /// True once no further move may be made.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True if `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates a board.
///
/// A completed line wins even on a full board; otherwise a full board is a
/// draw and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Winner { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
