//! Event types for different topics.

use game_core::{Command, IgnoredReason, SessionSettings};
use serde::{Deserialize, Serialize};

/// Session lifecycle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new session replaced whatever was there before.
    Started { settings: SessionSettings, seed: u64 },

    /// The session was discarded and the runtime is back at the menu.
    Discarded,

    /// A command arrived in a phase where it is not valid and did nothing.
    CommandIgnored {
        command: Command,
        reason: IgnoredReason,
    },
}
