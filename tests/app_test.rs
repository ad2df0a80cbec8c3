//! Tests for the application controller: status text, menu state and cues.

use noughts::{App, Command, Cue, CueSink};
use noughts_core::{Cell, Outcome, Player, Position};
use std::time::Duration;

/// Sink that remembers every cue and how it was played.
#[derive(Debug, Default)]
struct Recorder {
    played: Vec<Cue>,
    blocking: Vec<(Cue, Duration)>,
}

impl CueSink for Recorder {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }

    fn play_blocking(&mut self, cue: Cue, linger: Duration) {
        self.blocking.push((cue, linger));
    }
}

fn new_app() -> App<Recorder> {
    App::new(
        "TicTacToe".to_string(),
        Recorder::default(),
        Duration::from_millis(250),
    )
}

fn play_all(app: &mut App<Recorder>, cells: &[Position]) {
    for pos in cells {
        app.handle(Command::Play(*pos));
    }
}

#[test]
fn test_startup_state() {
    let app = new_app();
    assert_eq!(app.status(), "X's turn.");
    assert!(!app.new_enabled());
    assert!(app.is_running());
    assert_eq!(app.cues().played, vec![Cue::Startup]);
}

#[test]
fn test_moves_alternate_status_and_cues() {
    let mut app = new_app();

    app.handle(Command::Play(Position::TopLeft));
    assert_eq!(app.status(), "O's turn.");
    assert!(app.new_enabled());

    app.handle(Command::Play(Position::Center));
    assert_eq!(app.status(), "X's turn.");

    assert_eq!(
        app.cues().played,
        vec![Cue::Startup, Cue::XPlayed, Cue::OPlayed]
    );
}

#[test]
fn test_win_announced_with_win_cue() {
    let mut app = new_app();
    play_all(
        &mut app,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );

    assert_eq!(app.game().outcome(), Outcome::XWins);
    assert_eq!(app.status(), "X won the round!");
    assert_eq!(app.cues().played.last(), Some(&Cue::Win));
}

#[test]
fn test_tie_announced_with_tie_cue() {
    let mut app = new_app();
    play_all(
        &mut app,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );

    assert_eq!(app.game().outcome(), Outcome::Tie);
    assert_eq!(app.status(), "The round was a tie...");
    assert_eq!(app.cues().played.last(), Some(&Cue::Tie));
}

#[test]
fn test_played_cell_is_ignored() {
    let mut app = new_app();
    app.handle(Command::Play(Position::Center));
    let cues_before = app.cues().played.len();

    app.handle(Command::Play(Position::Center));

    assert_eq!(app.game().turn_count(), 1);
    assert_eq!(app.status(), "O's turn.");
    assert_eq!(app.cues().played.len(), cues_before);
}

#[test]
fn test_cells_disabled_after_round_ends() {
    let mut app = new_app();
    play_all(
        &mut app,
        &[
            Position::TopRight,
            Position::TopLeft,
            Position::Center,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
    );
    assert_eq!(app.status(), "X won the round!");

    app.handle(Command::Play(Position::BottomRight));

    assert_eq!(app.game().cell(Position::BottomRight), Cell::Empty);
    assert_eq!(app.game().turn_count(), 5);
}

#[test]
fn test_new_round_disabled_until_first_move() {
    let mut app = new_app();

    app.handle(Command::NewRound);
    assert_eq!(app.cues().played, vec![Cue::Startup]);

    app.handle(Command::Play(Position::Center));
    app.handle(Command::NewRound);

    assert_eq!(app.game().turn_count(), 0);
    assert_eq!(app.status(), "X's turn.");
    assert!(!app.new_enabled());
    assert_eq!(
        app.cues().played,
        vec![Cue::Startup, Cue::XPlayed, Cue::NewRound]
    );
}

#[test]
fn test_cursor_play() {
    let mut app = new_app();
    assert_eq!(app.cursor(), Position::Center);

    app.handle(Command::Cursor(crossterm::event::KeyCode::Up));
    app.handle(Command::PlayCursor);

    assert_eq!(
        app.game().cell(Position::TopCenter),
        Cell::Occupied(Player::X)
    );
}

#[test]
fn test_quit_waits_for_farewell_cue() {
    let mut app = new_app();
    app.handle(Command::Quit);

    assert!(!app.is_running());
    assert_eq!(
        app.cues().blocking,
        vec![(Cue::Quit, Duration::from_millis(250))]
    );
}
