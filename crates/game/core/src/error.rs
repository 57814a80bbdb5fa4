//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::BoardError`], [`crate::ExecuteError`])
//! are defined next to the code that produces them. In-game conditions are
//! never errors: invalid commands are ignored and clamping is the defined
//! behavior. Only configuration-time failures surface here.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be corrected by the caller (e.g. a party
    /// with too many participants).
    Validation,

    /// Board data or configuration is unusable; the session cannot start.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can retry with different input.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification across the crate so
/// runtimes can log and report failures consistently.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
