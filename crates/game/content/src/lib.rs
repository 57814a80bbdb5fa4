//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Board datasets per difficulty tier (RON, embedded at compile time)
//! - Custom board files (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state
//! except as the board a session was started on.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::BoardCatalog;

#[cfg(feature = "loaders")]
pub use builtin::load_board;

#[cfg(feature = "loaders")]
pub use loaders::{BoardFile, BoardLoader, ConfigLoader, ContentFactory, LoadResult};
