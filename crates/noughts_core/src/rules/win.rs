//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Fewest marks on the board before any line can be complete.
///
/// X needs three marks, and by then O has placed two.
pub const MIN_MARKS_FOR_WIN: u8 = 5;

/// Checks whether the mark at `last` completes a line.
///
/// Only the lines through `last` are inspected: its row, its column, and
/// whichever diagonals it lies on. The board is assumed not to have been
/// won before `last` was played. `marks` is the number of marks on the
/// board; below [`MIN_MARKS_FOR_WIN`] the check short-circuits.
#[instrument(skip(board), fields(row = last.row(), col = last.col()))]
pub fn check_win(board: &Board, last: Position, marks: u8) -> Option<Player> {
    if marks < MIN_MARKS_FOR_WIN {
        return None;
    }

    let player = board.get(last).mark()?;
    let (row, col) = (last.row(), last.col());
    let holds = |r: usize, c: usize| board.at(r, c).mark() == Some(player);

    let row_line = (0..3).all(|c| holds(row, c));
    let col_line = (0..3).all(|r| holds(r, col));
    let main_diagonal = row == col && (0..3).all(|i| holds(i, i));
    let anti_diagonal = row + col == 2 && (0..3).all(|i| holds(i, 2 - i));

    (row_line || col_line || main_diagonal || anti_diagonal).then_some(player)
}
