//! Content factory for building board catalogs from data files.

use std::path::{Path, PathBuf};

use game_core::{Difficulty, GameConfig};
use strum::IntoEnumIterator;

use crate::catalog::BoardCatalog;
use crate::loaders::{BoardLoader, ConfigLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── boards/
///     ├── easy.ron
///     ├── normal.ron
///     └── hard.ron
/// ```
///
/// Missing files fall back to the built-in content.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of the dataset for `difficulty`.
    pub fn board_path(&self, difficulty: Difficulty) -> PathBuf {
        self.data_dir
            .join("boards")
            .join(format!("{}.ron", difficulty.as_str()))
    }

    /// Builds a catalog from `boards/`, using built-in boards for missing tiers.
    pub fn load_catalog(&self) -> LoadResult<BoardCatalog> {
        let mut catalog = BoardCatalog::builtin()?;
        for difficulty in Difficulty::iter() {
            let path = self.board_path(difficulty);
            if path.exists() {
                catalog.insert(difficulty, BoardLoader::load(&path)?);
            }
        }
        Ok(catalog)
    }
}
