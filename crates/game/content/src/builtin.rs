//! Board datasets compiled into the crate.

use game_core::{Board, Difficulty};

use crate::loaders::{BoardLoader, LoadResult};

const EASY: &str = include_str!("../data/boards/easy.ron");
const NORMAL: &str = include_str!("../data/boards/normal.ron");
const HARD: &str = include_str!("../data/boards/hard.ron");

/// Raw RON source of the built-in dataset for `difficulty`.
pub fn source(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Normal => NORMAL,
        Difficulty::Hard => HARD,
    }
}

/// Loads and validates the built-in board for `difficulty`.
pub fn load_board(difficulty: Difficulty) -> LoadResult<Board> {
    BoardLoader::parse(source(difficulty))
        .map_err(|e| e.context(format!("Built-in {} board is invalid", difficulty.as_str())))
}
