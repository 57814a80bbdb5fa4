use crate::board::Difficulty;

/// Turn engine state machine phase.
///
/// ```text
/// NotStarted → AwaitingRoll → Resolving → (AwaitingRoll | GameOver)
/// ```
/// `GameOver` is terminal for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    NotStarted,
    AwaitingRoll,
    Resolving,
    GameOver,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::NotStarted => "not_started",
            TurnPhase::AwaitingRoll => "awaiting_roll",
            TurnPhase::Resolving => "resolving",
            TurnPhase::GameOver => "game_over",
        }
    }
}

/// Who sits at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameMode {
    /// Two humans sharing one device.
    TwoPlayer,
    /// One human against one automated player.
    VsAi,
    /// Two to four participants; humans are seated first.
    Party { humans: u8, automated: u8 },
}

impl GameMode {
    /// Returns `(humans, automated)` seat counts.
    pub fn seats(&self) -> (usize, usize) {
        match *self {
            GameMode::TwoPlayer => (2, 0),
            GameMode::VsAi => (1, 1),
            GameMode::Party { humans, automated } => (humans as usize, automated as usize),
        }
    }
}

impl core::fmt::Display for GameMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("two_player"),
            GameMode::VsAi => f.write_str("vs_ai"),
            GameMode::Party { humans, automated } => write!(f, "party:{humans}+{automated}"),
        }
    }
}

/// Mode and difficulty a session was started with; reused by "play again".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl SessionSettings {
    pub const fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }
}
