//! Noughts core - pure tic-tac-toe round logic.
//!
//! Everything a front end needs to run a two-player round lives here:
//! the board, the parity-driven turn order, win and tie detection.
//! Nothing in this crate renders, plays sound or reads input.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, Outcome};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::XWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod state;
mod types;

pub use error::{MoveError, StateError};
pub use position::Position;
pub use rules::{MIN_MARKS_FOR_WIN, check_win, is_full};
pub use state::GameState;
pub use types::{Board, Cell, Outcome, Player};
