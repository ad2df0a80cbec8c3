//! Command-line interface for noughts.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Disable sound cues
    #[arg(long)]
    pub silent: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<String>,

    /// Title shown above the board
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded settings.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.silent {
            let sound = config.sound().clone().with_enabled(false);
            config = config.with_sound(sound);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.as_str());
        }
        if let Some(title) = &self.title {
            let ui = config.ui().clone().with_title(title.as_str());
            config = config.with_ui(ui);
        }
        config
    }
}
