//! Sound cues for game events.
//!
//! The game never plays audio itself. Each event maps to a [`Cue`], and a
//! [`CueSink`] decides what, if anything, the player hears. Sinks swallow
//! their own failures: a cue that cannot play is skipped, never an error.

use crate::config::SoundConfig;
use noughts_core::{Outcome, Player};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, instrument};

/// A sound cue raised by the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    /// The application opened.
    Startup,
    /// X placed a mark and the round continues.
    XPlayed,
    /// O placed a mark and the round continues.
    OPlayed,
    /// A move decided the round for a player.
    Win,
    /// A move filled the board with no winner.
    Tie,
    /// The board was cleared for a new round.
    NewRound,
    /// The application is closing.
    Quit,
}

impl Cue {
    /// Cue for a move by `mover` that left the round at `outcome`.
    pub fn after_move(mover: Player, outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => match mover {
                Player::X => Cue::XPlayed,
                Player::O => Cue::OPlayed,
            },
            Outcome::XWins | Outcome::OWins => Cue::Win,
            Outcome::Tie => Cue::Tie,
        }
    }

    /// Number of bell strokes a terminal bell rings for this cue.
    pub fn strokes(self) -> usize {
        match self {
            Cue::Win => 3,
            Cue::Tie | Cue::Quit => 2,
            Cue::Startup | Cue::XPlayed | Cue::OPlayed | Cue::NewRound => 1,
        }
    }
}

/// Destination for sound cues.
pub trait CueSink {
    /// Starts `cue` and returns without waiting for it.
    fn play(&mut self, cue: Cue);

    /// Plays `cue` and blocks for `linger` so it can finish.
    fn play_blocking(&mut self, cue: Cue, linger: Duration) {
        self.play(cue);
        std::thread::sleep(linger);
    }
}

impl<S: CueSink + ?Sized> CueSink for Box<S> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }

    fn play_blocking(&mut self, cue: Cue, linger: Duration) {
        (**self).play_blocking(cue, linger);
    }
}

/// Sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn play(&mut self, cue: Cue) {
        debug!(%cue, "Cue muted");
    }

    fn play_blocking(&mut self, cue: Cue, _linger: Duration) {
        self.play(cue);
    }
}

/// Sink that rings the terminal bell.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Rings the bell on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Rings the bell on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    #[instrument(skip(self))]
    fn play(&mut self, cue: Cue) {
        let strokes = vec![0x07u8; cue.strokes()];
        if let Err(e) = self.out.write_all(&strokes).and_then(|()| self.out.flush()) {
            debug!(error = %e, "Bell unavailable, skipping cue");
        }
    }
}

/// Picks the sink the settings ask for.
pub fn sink_for(sound: &SoundConfig) -> Box<dyn CueSink> {
    if *sound.enabled() {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cues_follow_outcome() {
        assert_eq!(Cue::after_move(Player::X, Outcome::InProgress), Cue::XPlayed);
        assert_eq!(Cue::after_move(Player::O, Outcome::InProgress), Cue::OPlayed);
        assert_eq!(Cue::after_move(Player::O, Outcome::OWins), Cue::Win);
        assert_eq!(Cue::after_move(Player::X, Outcome::Tie), Cue::Tie);
    }

    #[test]
    fn every_cue_rings_the_bell() {
        use strum::IntoEnumIterator;

        for cue in Cue::iter() {
            assert!((1..=3).contains(&cue.strokes()), "{cue} rings {} times", cue.strokes());
        }
        assert!(Cue::Win.strokes() > Cue::XPlayed.strokes());
    }

    #[test]
    fn bell_writes_one_byte_per_stroke() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::XPlayed);
        bell.play(Cue::Win);
        assert_eq!(bell.into_inner(), vec![0x07; 4]);
    }

    #[test]
    fn cue_names_are_snake_case() {
        assert_eq!(Cue::NewRound.to_string(), "new_round");
        let name: &'static str = Cue::XPlayed.into();
        assert_eq!(name, "x_played");
    }
}
