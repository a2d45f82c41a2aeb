//! Terminal front end for time-travel tic-tac-toe.
//!
//! Renders a [`timeline_tictactoe::TimelineGame`] with ratatui, and offers a
//! headless replay command for scripting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use replay::{ReplayReport, replay};
pub use tui::run_tui;
