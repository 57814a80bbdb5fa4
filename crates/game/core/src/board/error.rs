use crate::error::{ErrorSeverity, GameError};

use super::Difficulty;

/// Errors raised while building a board from data.
///
/// All variants are configuration-time failures: a session cannot start on a
/// board that fails validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must contain at least a start and a goal square (got {len})")]
    TooShort { len: usize },

    #[error("square at index {index} has id {id}; ids must equal their index")]
    NonContiguousId { index: usize, id: u32 },

    #[error("start square must not carry an effect (found '{kind}')")]
    StartHasEffect { kind: String },

    #[error("square {index} has an invalid '{kind}' effect: {reason}")]
    InvalidEffectValue {
        index: usize,
        kind: &'static str,
        reason: &'static str,
    },

    #[error("no board dataset is available for difficulty '{difficulty}'")]
    Unavailable { difficulty: Difficulty },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "BOARD_TOO_SHORT",
            Self::NonContiguousId { .. } => "BOARD_NON_CONTIGUOUS_ID",
            Self::StartHasEffect { .. } => "BOARD_START_HAS_EFFECT",
            Self::InvalidEffectValue { .. } => "BOARD_INVALID_EFFECT_VALUE",
            Self::Unavailable { .. } => "BOARD_UNAVAILABLE",
        }
    }
}
