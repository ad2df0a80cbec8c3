//! Application state and logic.

use crate::cue::{Cue, CueSink};
use noughts_core::{GameState, Outcome, Player, Position};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::input::{Command, move_cursor};

/// Status line for a round, worded for the player.
pub fn status_line(game: &GameState) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("{}'s turn.", game.current_player()),
        Outcome::XWins => format!("{} won the round!", Player::X),
        Outcome::OWins => format!("{} won the round!", Player::O),
        Outcome::Tie => "The round was a tie...".to_string(),
    }
}

/// Main application state.
///
/// Owns the round and everything the window shows around it: the cursor,
/// the status line, and whether the "New" menu item is available.
pub struct App<S: CueSink> {
    game: GameState,
    cursor: Position,
    status: String,
    new_enabled: bool,
    title: String,
    cues: S,
    quit_linger: Duration,
    running: bool,
}

impl<S: CueSink> App<S> {
    /// Creates the application and plays the startup cue.
    #[instrument(skip(cues))]
    pub fn new(title: String, cues: S, quit_linger: Duration) -> Self {
        let game = GameState::new();
        let mut app = Self {
            status: status_line(&game),
            game,
            cursor: Position::Center,
            new_enabled: false,
            title,
            cues,
            quit_linger,
            running: true,
        };
        app.cues.play(Cue::Startup);
        info!("Application ready");
        app
    }

    /// Gets the current round.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the "New" menu item can be chosen.
    pub fn new_enabled(&self) -> bool {
        self.new_enabled
    }

    /// Title shown above the board.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// False once the player has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Gets the cue sink.
    pub fn cues(&self) -> &S {
        &self.cues
    }

    /// Handles one player command to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlayCursor => self.play(self.cursor),
            Command::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::NewRound => self.new_round(),
            Command::Quit => self.quit(),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Occupied cells and decided rounds leave everything as it was.
    fn play(&mut self, pos: Position) {
        let mover = self.game.current_player();

        match self.game.place(pos) {
            Ok(outcome) => {
                debug!(player = %mover, position = %pos, state = %self.game.to_json(), "Move applied to UI state");
                if self.game.turn_count() == 1 {
                    self.new_enabled = true;
                }
                self.status = status_line(&self.game);
                self.cues.play(Cue::after_move(mover, outcome));
            }
            Err(e) => {
                warn!(error = %e, position = %pos, "Move rejected");
            }
        }
    }

    /// Clears the board for a new round.
    fn new_round(&mut self) {
        if !self.new_enabled {
            debug!("New round requested before first move, ignoring");
            return;
        }

        info!(outcome = ?self.game.outcome(), "Starting new round");
        self.cues.play(Cue::NewRound);
        self.game.reset();
        self.new_enabled = false;
        self.cursor = Position::Center;
        self.status = status_line(&self.game);
    }

    /// Plays the farewell cue to completion and stops the loop.
    fn quit(&mut self) {
        info!("User quit");
        self.cues.play_blocking(Cue::Quit, self.quit_linger);
        self.running = false;
    }
}
