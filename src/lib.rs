//! Rewind - terminal tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Game logic**: [`rewind_tictactoe`] (timeline, rules, view model)
//! - **Config**: TOML settings with defaults ([`RewindConfig`])
//! - **TUI**: ratatui front end drawing the view model ([`run_tui`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, RewindConfig};

// Crate-level exports - Logging
pub use logging::init_file_logging;

// Crate-level exports - Terminal UI
pub use tui::{
    App, Command, Control, Focus, ScreenLayout, command_for, draw, move_cursor, run_app, run_tui,
};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    GameView, IgnoreReason, Intent, Player, Position, SortOrder, Status, Timeline, Transition,
    render,
};
