//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Position, Snapshot, Square, TimelineGame};

/// Invariant: snapshot `i` differs from snapshot `i - 1` in exactly one
/// cell, which went from empty to occupied and is the snapshot's recorded
/// location.
///
/// The first snapshot is the empty board.
pub struct SingleCellDeltaInvariant;

fn adds_one_mark(before: &Snapshot, after: &Snapshot) -> bool {
    let mut added = Vec::new();
    for (position, (old, new)) in Position::ALL
        .into_iter()
        .zip(before.board().squares().iter().zip(after.board().squares()))
    {
        match (old, new) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(_)) => added.push(position),
            _ => return false,
        }
    }
    matches!(added.as_slice(), [position] if *after.location() == Some(position.location()))
}

impl Invariant<TimelineGame> for SingleCellDeltaInvariant {
    fn holds(game: &TimelineGame) -> bool {
        let history = game.history();
        history.first() == Some(&Snapshot::start())
            && history.windows(2).all(|pair| adds_one_mark(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_played_game_holds() {
        let game = TimelineGame::replay([
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
        ]);
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = TimelineGame::replay([Position::Center]);
        let overwrite = game.history[1].advance(Position::Center, Player::O);
        game.history.push(overwrite);
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = TimelineGame::new();
        game.history[0] = game.history[0].advance(Position::Center, Player::X);
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}
