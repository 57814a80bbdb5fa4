//! Runtime wrappers around static game content.
//!
//! The board catalog and tunables are bundled into an [`OracleManager`] so the
//! runtime can build [`game_core::GameEnv`] views on demand. The data is
//! immutable at runtime; dynamic state lives in [`game_core::GameSession`].

use std::sync::Arc;

use game_content::BoardCatalog;
use game_core::{GameConfig, GameEnv, PcgRng};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) boards: Arc<BoardCatalog>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(boards: Arc<BoardCatalog>, config: Arc<GameConfig>) -> Self {
        Self {
            boards,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::new(self.boards.as_ref(), &self.rng, self.config.as_ref())
    }

    pub fn boards(&self) -> &BoardCatalog {
        &self.boards
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
