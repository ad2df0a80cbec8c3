//! Rejected move errors.

use super::Position;

/// Error returned when a move cannot be applied.
///
/// Every variant leaves the game untouched; callers treat them as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round is already decided.
    #[display("Round is already over")]
    GameOver,

    /// Coordinates fall outside the 3x3 board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error returned when a stored round does not describe a reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// More moves than the board has cells.
    #[display("Turn count {} exceeds 9", _0)]
    TooManyTurns(u8),

    /// Marks on the board disagree with the turn count.
    #[display("Board holds {} marks but turn count is {}", marks, turn_count)]
    MarkCountMismatch {
        /// Marks found on the board.
        marks: usize,
        /// Stored turn count.
        turn_count: u8,
    },

    /// X and O marks do not alternate starting with X.
    #[display("X holds {} marks after {} turns", x_marks, turn_count)]
    TurnOrderBroken {
        /// Marks held by X.
        x_marks: usize,
        /// Stored turn count.
        turn_count: u8,
    },

    /// Outcome cannot follow from a board with this many marks.
    #[display("Outcome {:?} is impossible after {} turns", outcome, turn_count)]
    OutcomeMismatch {
        /// Stored outcome.
        outcome: super::Outcome,
        /// Stored turn count.
        turn_count: u8,
    },
}

impl std::error::Error for StateError {}
