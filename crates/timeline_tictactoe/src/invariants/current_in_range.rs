//! Current position invariant.

use super::Invariant;
use crate::TimelineGame;

/// Invariant: the current position names an existing snapshot.
pub struct CurrentInRangeInvariant;

impl Invariant<TimelineGame> for CurrentInRangeInvariant {
    fn holds(game: &TimelineGame) -> bool {
        game.current_index() < game.history().len()
    }

    fn description() -> &'static str {
        "Current position lies within the history"
    }
}
