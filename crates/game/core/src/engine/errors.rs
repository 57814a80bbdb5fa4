//! Error types for command execution.

use crate::board::BoardError;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while executing a command through the game engine.
///
/// Only session construction can fail. Commands that are not valid in the
/// current phase are no-ops reported through
/// [`CommandStatus::Ignored`](super::CommandStatus::Ignored), never errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("board unavailable: {0}")]
    Board(#[from] BoardError),

    #[error(
        "party of {requested} is outside the supported {}..={} players",
        GameConfig::MIN_PLAYERS,
        GameConfig::MAX_PLAYERS
    )]
    InvalidPartySize { requested: usize },

    #[error("at least one human player is required")]
    NoHumanPlayers,
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Board(error) => error.severity(),
            Self::InvalidPartySize { .. } | Self::NoHumanPlayers => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Board(error) => error.error_code(),
            Self::InvalidPartySize { .. } => "EXECUTE_INVALID_PARTY_SIZE",
            Self::NoHumanPlayers => "EXECUTE_NO_HUMAN_PLAYERS",
        }
    }
}
