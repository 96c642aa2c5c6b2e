//! Session configuration

use crate::engine::Mode;

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Who controls the second seat
    pub mode: Mode,
    /// Fixed seed for the random opponent; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
