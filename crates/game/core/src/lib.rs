//! Deterministic game logic and data types for space sugoroku.
//!
//! `game-core` defines the canonical rules (board, players, effects, turn
//! flow) and exposes pure APIs that can be reused by the runtime, clients and
//! offline tools. All state mutation flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod board;
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use board::{
    Board, BoardError, Difficulty, EffectDescriptor, EffectKind, EffectTag, EffectValue, Square,
};
pub use config::GameConfig;
pub use effect::{EffectContext, EffectEvent, EventTone, ModifiedRoll, apply_effect};
pub use engine::{
    Command, CommandStatus, ExecuteError, GameEngine, IgnoredReason, Notification, SkippedTurn,
    TurnOutcome, TurnRecord, reduce,
};
pub use env::{
    BoardOracle, DrawStream, GameEnv, PcgRng, RngOracle, SequenceRng, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameMode, GameSession, Player, PlayerId, Roster, SessionSettings, TurnPhase, init_players,
};
