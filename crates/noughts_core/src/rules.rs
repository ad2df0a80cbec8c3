//! Win and tie rules for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{MIN_MARKS_FOR_WIN, check_win};
