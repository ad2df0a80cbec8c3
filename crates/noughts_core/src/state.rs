//! Round state machine for tic-tac-toe.

use super::rules::{MIN_MARKS_FOR_WIN, check_win, is_full};
use super::{Board, Cell, MoveError, Outcome, Player, Position, StateError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Moves in a round that fills the board.
const MAX_TURNS: u8 = 9;

/// State of one round: the board, how many moves were played, and the outcome.
///
/// Whose turn it is follows from the parity of the turn count, so the board
/// invariant `marks == turn_count` is all that ties the fields together.
/// Deserialized rounds are checked against it before they are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct GameState {
    board: Board,
    turn_count: u8,
    outcome: Outcome,
}

impl GameState {
    /// Creates a fresh round with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves accepted this round.
    pub fn turn_count(&self) -> u8 {
        self.turn_count
    }

    /// Current outcome of the round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Player who places the next mark.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn_count)
    }

    /// True once the round is won or tied.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::empty_cells(&self.board)
        }
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` if either coordinate is outside `0..3`,
    /// otherwise fails as [`GameState::place`] does.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Plays the current player's mark at `pos` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` once the round is decided, and
    /// `MoveError::SquareOccupied` if the cell already holds a mark. In both
    /// cases the state is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player(), turn = self.turn_count))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player();
        self.board.set(pos, Cell::Occupied(player));
        self.turn_count += 1;

        if let Some(winner) = self.check_win(pos) {
            self.outcome = Outcome::won_by(winner);
            info!(%winner, turn = self.turn_count, "Round won");
        } else if self.is_board_full() {
            self.outcome = Outcome::Tie;
            info!("Round tied");
        }

        debug_assert_eq!(self.board.marks(), usize::from(self.turn_count));
        debug!(outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Checks whether the mark at `last` completed a line.
    ///
    /// Returns `None` before five marks are on the board.
    pub fn check_win(&self, last: Position) -> Option<Player> {
        check_win(&self.board, last, self.turn_count)
    }

    /// True when all nine cells hold a mark.
    pub fn is_board_full(&self) -> bool {
        let full = self.turn_count >= MAX_TURNS;
        debug_assert_eq!(full, is_full(&self.board));
        full
    }

    /// Starts a new round: empty board, X to move, outcome in progress.
    #[instrument(skip(self), fields(turn = self.turn_count, outcome = ?self.outcome))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn_count = 0;
        self.outcome = Outcome::InProgress;
        debug!("Round reset");
    }

    /// Serializes the round as JSON for diagnostics.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

/// Unchecked stored form of a round, validated into [`GameState`].
#[derive(Deserialize)]
struct RoundRecord {
    board: Board,
    turn_count: u8,
    outcome: Outcome,
}

impl TryFrom<RoundRecord> for GameState {
    type Error = StateError;

    fn try_from(record: RoundRecord) -> Result<Self, Self::Error> {
        let RoundRecord {
            board,
            turn_count,
            outcome,
        } = record;

        if turn_count > MAX_TURNS {
            return Err(StateError::TooManyTurns(turn_count));
        }

        let marks = board.marks();
        if marks != usize::from(turn_count) {
            return Err(StateError::MarkCountMismatch { marks, turn_count });
        }

        // X moves on even turns, so X holds the extra mark after an odd count.
        let x_marks = board.marks_of(Player::X);
        if x_marks != usize::from(turn_count).div_ceil(2) {
            return Err(StateError::TurnOrderBroken {
                x_marks,
                turn_count,
            });
        }

        let possible = match outcome {
            Outcome::InProgress => turn_count < MAX_TURNS,
            Outcome::XWins | Outcome::OWins => turn_count >= MIN_MARKS_FOR_WIN,
            Outcome::Tie => turn_count == MAX_TURNS,
        };
        if !possible {
            return Err(StateError::OutcomeMismatch {
                outcome,
                turn_count,
            });
        }

        Ok(Self {
            board,
            turn_count,
            outcome,
        })
    }
}
