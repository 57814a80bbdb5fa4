//! Board catalog keyed by difficulty tier.

use std::collections::HashMap;

use game_core::{Board, BoardError, BoardOracle, Difficulty};

/// Validated boards for each difficulty tier.
///
/// Boards are validated once when inserted; lookups hand out clones.
#[derive(Clone, Debug, Default)]
pub struct BoardCatalog {
    boards: HashMap<Difficulty, Board>,
}

impl BoardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog serving `board` for every tier.
    pub fn single(board: Board) -> Self {
        use strum::IntoEnumIterator;

        let boards = Difficulty::iter()
            .map(|difficulty| (difficulty, board.clone()))
            .collect();
        Self { boards }
    }

    /// Catalog of the datasets compiled into this crate.
    #[cfg(feature = "loaders")]
    pub fn builtin() -> crate::loaders::LoadResult<Self> {
        use strum::IntoEnumIterator;

        let mut catalog = Self::new();
        for difficulty in Difficulty::iter() {
            catalog.insert(difficulty, crate::builtin::load_board(difficulty)?);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, difficulty: Difficulty, board: Board) -> Option<Board> {
        self.boards.insert(difficulty, board)
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<&Board> {
        self.boards.get(&difficulty)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl BoardOracle for BoardCatalog {
    fn board(&self, difficulty: Difficulty) -> Result<Board, BoardError> {
        self.get(difficulty)
            .cloned()
            .ok_or(BoardError::Unavailable { difficulty })
    }
}
