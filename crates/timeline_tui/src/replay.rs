//! Headless replay: play a list of moves and report the result.

use serde::Serialize;
use timeline_tictactoe::{
    CellView, HistoryEntry, HistoryError, Outcome, PlayResult, Position, SortOrder, TimelineGame,
    cell_views, history_entries, status,
};
use tracing::{debug, instrument};

/// Everything a front end would show after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Board rows, `.` for empty cells.
    pub board: Vec<String>,
    /// Status line.
    pub status: String,
    /// Evaluated outcome of the current board.
    pub outcome: Outcome,
    /// Current history index.
    pub current: usize,
    /// The nine cells with winning-line highlights.
    pub cells: Vec<CellView>,
    /// History labels in display order.
    pub history: Vec<HistoryEntry>,
    /// Label of the sort toggle.
    pub sort_toggle: String,
    /// Moves that were ignored and why.
    pub ignored: Vec<String>,
}

/// Plays `moves` from the empty board, then optionally jumps.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(
    moves: &[Position],
    jump: Option<usize>,
    sort_order: SortOrder,
) -> Result<ReplayReport, HistoryError> {
    let mut game = TimelineGame::with_sort_order(sort_order);
    let mut ignored = Vec::new();
    for (n, position) in moves.iter().enumerate() {
        if let PlayResult::Ignored(reason) = game.play(*position) {
            debug!(n, %position, %reason, "Replay move ignored");
            ignored.push(format!("move {} ({}): {}", n + 1, position, reason));
        }
    }
    if let Some(index) = jump {
        game.try_jump_to(index)?;
    }
    Ok(report(&game, ignored))
}

fn report(game: &TimelineGame, ignored: Vec<String>) -> ReplayReport {
    ReplayReport {
        board: game
            .current()
            .board()
            .to_string()
            .lines()
            .map(str::to_string)
            .collect(),
        status: status(game).to_string(),
        outcome: game.outcome(),
        current: game.current_index(),
        cells: cell_views(game).to_vec(),
        history: history_entries(game),
        sort_toggle: game.sort_order().toggle_label().to_string(),
        ignored,
    }
}

impl ReplayReport {
    /// Plain-text rendering: board, status, winning line, history.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.board {
            out.push_str(row);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push('\n');
        if let Some(line) = self.outcome.winning_line() {
            let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
            out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
        }
        out.push_str("\nHistory:\n");
        for entry in &self.history {
            let marker = if entry.is_current { '*' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", entry.label));
        }
        for note in &self.ignored {
            out.push_str(&format!("ignored {note}\n"));
        }
        out
    }
}
