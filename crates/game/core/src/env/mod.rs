//! Read-only environment the engine consults while resolving commands.
//!
//! The engine never owns its collaborators: board datasets, the random source
//! and tunables are borrowed through [`GameEnv`] for the duration of a
//! command.

mod rng;

pub use rng::{DrawStream, PcgRng, RngOracle, SequenceRng, compute_seed};

use crate::board::{Board, BoardError, Difficulty};
use crate::config::GameConfig;

/// Source of board definitions keyed by difficulty tier.
pub trait BoardOracle: Send + Sync {
    /// Returns the validated board for `difficulty`.
    fn board(&self, difficulty: Difficulty) -> Result<Board, BoardError>;
}

/// A single board serves every difficulty.
impl BoardOracle for Board {
    fn board(&self, _difficulty: Difficulty) -> Result<Board, BoardError> {
        Ok(self.clone())
    }
}

/// Bundles the oracles used by [`crate::engine::GameEngine`].
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    boards: &'a dyn BoardOracle,
    rng: &'a dyn RngOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        boards: &'a dyn BoardOracle,
        rng: &'a dyn RngOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            boards,
            rng,
            config,
        }
    }

    pub fn boards(&self) -> &'a dyn BoardOracle {
        self.boards
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}
