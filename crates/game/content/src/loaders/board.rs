//! Board dataset loader.
//!
//! A board file is a versioned RON document:
//!
//! ```ron
//! #![enable(implicit_some)]
//! (
//!     version: 1,
//!     name: "Solar System Voyage",
//!     difficulty: normal,
//!     squares: [
//!         (id: 0, name: "Launch Pad", icon: "🚀"),
//!         (id: 1, name: "Solar Wind", effect: (kind: "move", value: 3)),
//!         (id: 2, name: "Goal"),
//!     ],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use game_core::{Board, Difficulty, Square};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Raw board document, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub version: u32,
    pub name: String,
    /// Tier the dataset was written for. Informational.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    pub squares: Vec<Square>,
}

/// Loader for board datasets from RON files.
pub struct BoardLoader;

impl BoardLoader {
    /// Dataset format version this loader understands.
    pub const SUPPORTED_VERSION: u32 = 1;

    /// Load and validate a board from a RON file.
    pub fn load(path: &Path) -> LoadResult<Board> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid board file {}", path.display()))
    }

    /// Parse and validate a board from RON text.
    pub fn parse(content: &str) -> LoadResult<Board> {
        let file = Self::parse_file(content)?;
        let name = file.name;
        let board = Board::new(file.squares)
            .with_context(|| format!("Board '{name}' failed validation"))?;

        tracing::debug!(
            board = %name,
            squares = board.len(),
            effects = board.effect_indices().count(),
            "board loaded"
        );
        Ok(board)
    }

    /// Parse the raw document without validating squares.
    pub fn parse_file(content: &str) -> LoadResult<BoardFile> {
        let file: BoardFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse board RON: {}", e))?;

        if file.version != Self::SUPPORTED_VERSION {
            anyhow::bail!(
                "Unsupported board version {} (expected {})",
                file.version,
                Self::SUPPORTED_VERSION
            );
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{BoardError, EffectKind, EffectTag, EffectValue};
    use std::io::Write;

    const SMALL: &str = r#"
        #![enable(implicit_some)]
        (
            version: 1,
            name: "Test Track",
            squares: [
                (id: 0, name: "Start"),
                (id: 1, name: "Burst", effect: (kind: "energy_burst", value: [2, -2])),
                (id: 2, name: "Odd", effect: (kind: "quasar_pulse")),
                (id: 3, name: "Goal", icon: "🏁"),
            ],
        )
    "#;

    #[test]
    fn parses_effects_and_keeps_unknown_kinds() {
        let board = BoardLoader::parse(SMALL).unwrap();
        assert_eq!(board.len(), 4);

        let burst = board.square(1).unwrap().effect.as_ref().unwrap();
        assert_eq!(burst.kind, EffectTag::Known(EffectKind::EnergyBurst));
        assert_eq!(burst.value, Some(EffectValue::List(vec![2, -2])));

        let odd = board.square(2).unwrap().effect.as_ref().unwrap();
        assert_eq!(odd.kind, EffectTag::Unrecognized("quasar_pulse".into()));
        assert_eq!(board.goal().icon.as_deref(), Some("🏁"));
    }

    #[test]
    fn values_are_plain_numbers_and_lists() {
        let content = SMALL.replace(
            "(id: 2, name: \"Odd\", effect: (kind: \"quasar_pulse\")),",
            "(id: 2, name: \"Drift\", effect: (kind: \"move\", value: -3)),",
        );
        let board = BoardLoader::parse(&content).unwrap();

        let drift = board.square(2).unwrap().effect.as_ref().unwrap();
        assert_eq!(drift.value, Some(EffectValue::Scalar(-3)));

        let burst = board.square(1).unwrap().effect.as_ref().unwrap();
        assert_eq!(burst.value, Some(EffectValue::List(vec![2, -2])));
    }

    #[test]
    fn rejects_unsupported_version() {
        let content = SMALL.replace("version: 1", "version: 2");
        let err = BoardLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("Unsupported board version 2"));
    }

    #[test]
    fn reports_validation_errors_as_board_errors() {
        let content = SMALL.replace("(id: 2,", "(id: 5,");
        let err = BoardLoader::parse(&content).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoardError>(),
            Some(&BoardError::NonContiguousId { index: 2, id: 5 })
        );
    }

    #[test]
    fn rejects_bad_effect_shapes() {
        let content = SMALL.replace("[2, -2]", "[2]");
        let err = BoardLoader::parse(&content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BoardError>(),
            Some(BoardError::InvalidEffectValue { index: 1, .. })
        ));
    }

    #[test]
    fn loads_from_disk_with_path_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let board = BoardLoader::load(file.path()).unwrap();
        assert_eq!(board.last_index(), 3);

        let missing = file.path().with_extension("missing");
        let err = BoardLoader::load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"(version: 1, name: ").unwrap();
        let err = BoardLoader::load(broken.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid board file"));
    }
}
