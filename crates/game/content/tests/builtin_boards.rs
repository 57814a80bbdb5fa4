use std::collections::HashSet;

use game_content::{BoardCatalog, BoardLoader, builtin};
use game_core::{BoardOracle, Difficulty, EffectKind};
use strum::IntoEnumIterator;

#[test]
fn builtin_boards_have_expected_lengths() {
    let catalog = BoardCatalog::builtin().unwrap();
    let lengths: Vec<usize> = Difficulty::iter()
        .map(|difficulty| catalog.board(difficulty).unwrap().len())
        .collect();
    assert_eq!(lengths, [24, 30, 40]);
}

#[test]
fn builtin_boards_satisfy_board_contract() {
    for difficulty in Difficulty::iter() {
        let board = builtin::load_board(difficulty).unwrap();
        for (index, square) in board.squares().iter().enumerate() {
            assert_eq!(square.id as usize, index, "{difficulty}");
        }
        assert!(board.start().effect.is_none());

        for square in board.squares() {
            if let Some(effect) = &square.effect {
                assert!(
                    effect.kind.known().is_some(),
                    "{difficulty}: unknown kind {}",
                    effect.kind
                );
            }
        }
    }
}

#[test]
fn builtin_files_declare_their_tier() {
    for difficulty in Difficulty::iter() {
        let file = BoardLoader::parse_file(builtin::source(difficulty)).unwrap();
        assert_eq!(file.version, BoardLoader::SUPPORTED_VERSION);
        assert_eq!(file.difficulty, Some(difficulty));
    }
}

#[test]
fn harder_tiers_are_denser() {
    let density = |difficulty| {
        let board = builtin::load_board(difficulty).unwrap();
        board.effect_indices().count() as f64 / board.len() as f64
    };
    assert!(density(Difficulty::Easy) < density(Difficulty::Normal));
    assert!(density(Difficulty::Normal) < density(Difficulty::Hard));
}

#[test]
fn every_effect_kind_appears_somewhere() {
    let used: HashSet<EffectKind> = Difficulty::iter()
        .flat_map(|difficulty| builtin::load_board(difficulty).unwrap().squares().to_vec())
        .filter_map(|square| square.effect.and_then(|effect| effect.kind.known()))
        .collect();

    let missing: Vec<_> = EffectKind::iter().filter(|kind| !used.contains(kind)).collect();
    assert!(missing.is_empty(), "unused kinds: {missing:?}");
}
