//! Command-line options for the GUI launcher.

use clap::{Parser, ValueEnum};
use gomoku::{GameConfig, Mode};

/// Five in a row on a 10x10 board
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Who plays O
    #[arg(short, long, value_enum, default_value_t = ModeArg::Pvp)]
    pub mode: ModeArg,

    /// Fixed seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Game mode as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans, one mouse
    Pvp,
    /// Human X against the random opponent
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::HumanVsHuman,
            ModeArg::Ai => Mode::HumanVsAi,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        GameConfig {
            mode: self.mode.into(),
            seed: self.seed,
        }
    }
}
