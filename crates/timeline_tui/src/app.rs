//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use timeline_tictactoe::{
    HistoryEntry, PlayResult, Position, SortOrder, TimelineGame, history_entries,
};
use tracing::{debug, info, instrument};

use crate::input::{digit_position, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The history list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: TimelineGame,
    cursor: Position,
    focus: Focus,
    /// History index of the highlighted entry in the history panel.
    selected: usize,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new(sort_order: SortOrder) -> Self {
        Self::with_game(TimelineGame::with_sort_order(sort_order))
    }

    /// Wraps an existing game.
    pub fn with_game(game: TimelineGame) -> Self {
        let selected = game.current_index();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &TimelineGame {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History entries in display order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.game)
    }

    /// Display row of the selected history entry.
    pub fn selected_row(&self) -> usize {
        self.entries()
            .iter()
            .position(|e| e.index == self.selected)
            .unwrap_or(0)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.game.toggle_sort_order();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_position(c) {
                    self.play(position);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let entries = self.entries();
        let row = self.selected_row();
        match code {
            KeyCode::Up => self.selected = entries[row.saturating_sub(1)].index,
            KeyCode::Down => self.selected = entries[(row + 1).min(entries.len() - 1)].index,
            KeyCode::Home => self.selected = entries[0].index,
            KeyCode::End => self.selected = entries[entries.len() - 1].index,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let entry = &entries[row];
                if entry.is_jumpable() {
                    self.game.jump_to(entry.index);
                } else {
                    debug!(index = entry.index, "Already at this entry");
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        self.cursor = position;
        match self.game.play(position) {
            PlayResult::Placed { .. } => self.selected = self.game.current_index(),
            PlayResult::Ignored(reason) => debug!(%reason, "Move ignored"),
        }
    }
}
