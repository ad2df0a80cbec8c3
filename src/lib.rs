//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! The round logic lives in [`noughts_core`]; this crate wraps it in a
//! keyboard-driven terminal window with a menu, a status line and sound cues.
//!
//! # Architecture
//!
//! - **App**: owns the round, the cursor and the menu state; maps events to cues
//! - **Cues**: fixed lookup from game events to sounds, played through a [`CueSink`]
//! - **Config**: optional TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use noughts::{App, Command, Silent};
//! use noughts_core::{Outcome, Position};
//! use std::time::Duration;
//!
//! let mut app = App::new("TicTacToe".to_string(), Silent, Duration::ZERO);
//! app.handle(Command::Play(Position::Center));
//! assert_eq!(app.status(), "O's turn.");
//! assert_eq!(app.game().outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod cue;
mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Settings
pub use config::{Config, ConfigError, SoundConfig, UiConfig};

// Crate-level exports - Sound cues
pub use cue::{Cue, CueSink, Silent, TerminalBell, sink_for};

// Crate-level exports - Terminal UI
pub use tui::{App, Command, command_for, move_cursor, run_tui, status_line};
