//! Tests for full rounds played through the public API.

use noughts_core::{Cell, GameState, MoveError, Outcome, Player, Position};

fn play(moves: &[(usize, usize)]) -> GameState {
    let mut game = GameState::new();
    for &(row, col) in moves {
        game.apply_move(row, col).expect("Valid move");
    }
    game
}

#[test]
fn test_main_diagonal_win() {
    // X:0,0  O:0,1  X:1,1  O:0,2  X:2,2
    let game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(game.outcome(), Outcome::XWins);
    assert_eq!(game.turn_count(), 5);
}

#[test]
fn test_anti_diagonal_win() {
    // X:0,2  O:0,0  X:1,1  O:1,0  X:2,0
    let game = play(&[(0, 2), (0, 0), (1, 1), (1, 0), (2, 0)]);
    assert_eq!(game.outcome(), Outcome::XWins);
}

#[test]
fn test_o_wins_column() {
    // X:0,0  O:0,1  X:2,2  O:1,1  X:1,0  O:2,1
    let game = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
    assert_eq!(game.outcome(), Outcome::OWins);
    assert_eq!(game.outcome().winner(), Some(Player::O));
}

#[test]
fn test_full_board_tie() {
    // X O X
    // X O O
    // O X X
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(game.outcome(), Outcome::Tie);
    assert!(game.is_board_full());
    assert_eq!(game.turn_count(), 9);
}

#[test]
fn test_win_on_ninth_move_is_not_a_tie() {
    // X O X
    // O X O
    // O X X  <- X completes the main diagonal with the last cell
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(game.outcome(), Outcome::XWins);
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut game = play(&[(1, 1)]);
    let before = game.clone();

    let result = game.apply_move(1, 1);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_moves_after_decision_are_rejected() {
    let mut game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    let before = game.clone();

    assert_eq!(game.apply_move(2, 0), Err(MoveError::GameOver));
    assert_eq!(game, before);
    assert_eq!(game.cell(Position::BottomLeft), Cell::Empty);
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut game = GameState::new();
    assert_eq!(
        game.apply_move(3, 1),
        Err(MoveError::OutOfBounds { row: 3, col: 1 })
    );
    assert_eq!(game, GameState::new());
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    once.reset();
    let mut twice = once.clone();
    twice.reset();

    assert_eq!(once, twice);
    assert_eq!(once, GameState::new());
    assert_eq!(once.current_player(), Player::X);
}

#[test]
fn test_reset_reopens_decided_round() {
    let mut game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    game.reset();
    assert_eq!(game.apply_move(0, 1), Ok(Outcome::InProgress));
    assert_eq!(game.cell(Position::TopCenter), Cell::Occupied(Player::X));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Cell Center is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Round is already over");
}
