use crate::levels::{BuiltinLevel, DEFAULT_LEVEL, find_level};
use clap::Parser;
use derive_more::{Display, Error};
use std::path::PathBuf;
use std::time::Duration;

/// Terminal Sokoban with multi-level undo.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// Built-in level to play.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_LEVEL)]
    pub level: String,

    /// Print the built-in level names and exit.
    #[arg(long)]
    pub list_levels: bool,

    /// How long to wait for a key press before redrawing, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub poll_ms: u64,

    /// File that receives log output; the terminal itself is taken by the game.
    #[arg(long, value_name = "PATH", default_value = "sokoban.log")]
    pub log_file: PathBuf,

    /// Write a JSON snapshot of the final level state here on exit.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Display, Error)]
#[display("unknown level '{name}'; use --list-levels to see the built-in levels")]
pub struct UnknownLevel {
    pub name: String,
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn builtin_level(&self) -> Result<&'static BuiltinLevel, UnknownLevel> {
        find_level(&self.level).ok_or_else(|| UnknownLevel {
            name: self.level.clone(),
        })
    }
}
