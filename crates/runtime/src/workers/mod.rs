//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the authoritative game session and executes
//! gameplay commands one at a time.

mod session;

pub use session::{Command, SessionWorker};
