//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player to move at a given history index.
    ///
    /// X moves from even indices, O from odd ones.
    pub fn to_move_at(index: usize) -> Self {
        if index % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Row and column of a cell, both zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Location {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = cells.iter().map(|s| s.symbol()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character is neither a mark nor an empty cell.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O` or `.`/`-` for empty.
    ///
    /// Whitespace and `/` or `|` separators are ignored, so
    /// `"XOX/XOO/OXX"` and the output of [`Board`]'s `Display` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// One immutable entry of the game history.
///
/// Holds the board after a move and where that move was made. The
/// snapshot at the start of the game has no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Where the producing move was made.
    location: Option<Location>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Builds the snapshot that follows this one when `player` marks `pos`.
    pub(crate) fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            location: Some(pos.location()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_move_parity() {
        assert_eq!(Player::to_move_at(0), Player::X);
        assert_eq!(Player::to_move_at(1), Player::O);
        assert_eq!(Player::to_move_at(8), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 9);
    }

    #[test]
    fn test_parse_display_round_trip() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XOX/XOO".parse::<Board>(),
            Err(BoardParseError::WrongLength(6))
        );
        assert_eq!(
            "XOX/XQO/OXX".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Q'))
        );
    }

    #[test]
    fn test_parse_error_is_a_leaf_error() {
        let err: Box<dyn std::error::Error> = Box::new(BoardParseError::WrongLength(6));
        assert_eq!(err.to_string(), "Expected 9 cells, found 6");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_location_display() {
        let location = Location { row: 2, col: 1 };
        assert_eq!(location.to_string(), "(2, 1)");
    }

    #[test]
    fn test_snapshot_advance_records_location() {
        let start = Snapshot::start();
        assert_eq!(start.location(), &None);

        let next = start.advance(Position::MiddleRight, Player::O);
        assert_eq!(next.location(), &Some(Location { row: 1, col: 2 }));
        assert_eq!(
            next.board().get(Position::MiddleRight),
            Square::Occupied(Player::O)
        );
        assert_eq!(start.board(), &Board::new());
    }
}
