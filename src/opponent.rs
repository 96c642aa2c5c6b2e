//! Uniform-random automated opponent
//!
//! Picks any empty cell with equal probability. There is no search and no
//! evaluation. A fixed seed makes the sequence of picks reproducible, which
//! is what the tests rely on.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::board::{Board, Pos};

/// Random move picker for the automated seat.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    /// Create an opponent with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an opponent seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Choose an empty cell uniformly at random.
    ///
    /// Returns `None` when the board is full.
    pub fn choose(&mut self, board: &Board) -> Option<Pos> {
        let candidates = board.empty_cells();
        let pick = candidates.choose(&mut self.rng).copied();
        trace!(candidates = candidates.len(), ?pick, "random pick");
        pick
    }
}
