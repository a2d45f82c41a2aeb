//! The game state manager: a history of snapshots and a cursor into it.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use crate::{Outcome, Player, Position, Snapshot, evaluate};

/// Display order of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Newest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for a control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The current board already has a winner or is full.
    #[display("Game is already over")]
    GameDecided,
    /// The target square is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// A raw index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of [`TimelineGame::play`].
///
/// Ignored moves leave the game untouched; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// The mark was placed and a snapshot appended.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlayResult {
    /// True if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayResult::Placed { .. })
    }
}

/// Error for a checked jump outside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The index does not name a snapshot.
    #[display("History index {index} out of range (history has {len} snapshots)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of snapshots.
        len: usize,
    },
}

/// Error for a stored timeline that could not have been reached by play.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid timeline: {}",
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
)]
pub struct TimelineError {
    /// Every invariant the timeline breaks.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

/// Tic-tac-toe with time travel.
///
/// Owns every snapshot reached this session and the index of the one being
/// shown. Playing from an earlier snapshot discards the snapshots after it.
///
/// Deserialization checks the timeline invariants and rejects histories
/// that `play` could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct TimelineGame {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current: usize,
    sort_order: SortOrder,
}

/// Unchecked wire form of [`TimelineGame`].
#[derive(Deserialize)]
struct RawTimeline {
    history: Vec<Snapshot>,
    current: usize,
    #[serde(default)]
    sort_order: SortOrder,
}

impl TryFrom<RawTimeline> for TimelineGame {
    type Error = TimelineError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current: raw.current,
            sort_order: raw.sort_order,
        };
        TimelineInvariants::check_all(&game).map_err(|violations| {
            debug!(count = violations.len(), "Rejected stored timeline");
            TimelineError { violations }
        })?;
        Ok(game)
    }
}

impl TimelineGame {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a game with a preferred history order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::start()],
            current: 0,
            sort_order,
        }
    }

    /// Builds a game by playing `positions` in turn from the empty board.
    ///
    /// Moves that [`play`](Self::play) would ignore are ignored here too.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut game = Self::new();
        for position in positions {
            game.play(position);
        }
        game
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot being shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The snapshot being shown.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current]
    }

    /// Preferred display order of the history.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Player whose turn it is at the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current)
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current().board())
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored when the current board is decided or the square is taken.
    /// Otherwise every snapshot after the current one is dropped, the new
    /// snapshot is appended and becomes current.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn play(&mut self, position: Position) -> PlayResult {
        if self.outcome().is_decided() {
            debug!("Game already decided, ignoring move");
            return PlayResult::Ignored(IgnoreReason::GameDecided);
        }

        let snapshot = self.current();
        if !snapshot.board().is_empty(position) {
            debug!("Square occupied, ignoring move");
            return PlayResult::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let player = self.to_move();
        let next = snapshot.advance(position, player);

        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated after move: {:?}",
            TimelineInvariants::check_all(self)
        );

        info!(%player, %position, discarded, move_number = self.current, "Move placed");
        PlayResult::Placed { player, position }
    }

    /// Plays at a raw board index (0-8).
    pub fn play_index(&mut self, index: usize) -> PlayResult {
        match Position::from_index(index) {
            Some(position) => self.play(position),
            None => {
                debug!(index, "Index out of bounds, ignoring move");
                PlayResult::Ignored(IgnoreReason::OutOfBounds(index))
            }
        }
    }

    /// Makes snapshot `index` current. History is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not name a snapshot; callers only offer
    /// indices taken from [`history`](Self::history).
    #[instrument(skip(self), fields(from = self.current))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.history.len(),
            "jump_to({index}) out of range: history has {} snapshots",
            self.history.len()
        );
        self.current = index;
        debug!("Jumped");
    }

    /// Checked form of [`jump_to`](Self::jump_to) for untrusted indices.
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.jump_to(index);
        Ok(())
    }

    /// Flips the history display order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Toggled history order");
    }
}

impl Default for TimelineGame {
    fn default() -> Self {
        Self::new()
    }
}
