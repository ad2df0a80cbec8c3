//! Keyboard mapping for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_core::Position;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Play in the cell under the cursor.
    PlayCursor,
    /// Play in a specific cell.
    Play(Position),
    /// Start a new round.
    NewRound,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command.
///
/// Digits 1-9 address cells in row-major order. Menu items answer to their
/// first letter or to Ctrl plus that letter; Ctrl+C also quits.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Cursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char(c @ '1'..='9') if !ctrl => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Play),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewRound),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Right => (row, col + 1),
        KeyCode::Left => (row, col.wrapping_sub(1)),
        KeyCode::Down => (row + 1, col),
        KeyCode::Up => (row.wrapping_sub(1), col),
        _ => (row, col),
    };

    // Edges stop the cursor rather than wrapping it.
    Position::from_row_col(row, col).unwrap_or(cursor)
}
