//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and session construction so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ErrorSeverity, ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a board catalog to be configured before building")]
    MissingBoards,

    #[error(transparent)]
    Engine(#[from] ExecuteError),
}

impl RuntimeError {
    /// Severity of engine errors; infrastructure failures are fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Engine(error) => error.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
