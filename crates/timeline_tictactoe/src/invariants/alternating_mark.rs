//! Alternating mark invariant: X and O take turns along the history.

use super::Invariant;
use crate::{Player, Square, TimelineGame};

/// Invariant: every mark added to snapshot `i` belongs to the player to
/// move at `i - 1`, so X fills odd snapshots and O even ones.
pub struct AlternatingMarkInvariant;

impl Invariant<TimelineGame> for AlternatingMarkInvariant {
    fn holds(game: &TimelineGame) -> bool {
        game.history().windows(2).enumerate().all(|(i, pair)| {
            let mover = Player::to_move_at(i);
            pair[0]
                .board()
                .squares()
                .iter()
                .zip(pair[1].board().squares())
                .all(|(old, new)| match (old, new) {
                    (Square::Empty, Square::Occupied(player)) => *player == mover,
                    _ => true,
                })
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the history"
    }
}
