//! What a command did, for presentation adapters to replay.

use crate::effect::{EffectEvent, ModifiedRoll};
use crate::state::{PlayerId, SessionSettings, TurnPhase};

/// Input to [`GameEngine::execute`](super::GameEngine::execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Command {
    /// Replaces the session with a fresh one.
    StartGame { settings: SessionSettings, seed: u64 },
    /// Rolls for the current human player.
    RequestRoll,
    /// Discards the session.
    ReturnToMenu,
    /// Restarts with the previous settings and a derived seed.
    PlayAgain,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::StartGame { .. } => "start_game",
            Command::RequestRoll => "request_roll",
            Command::ReturnToMenu => "return_to_menu",
            Command::PlayAgain => "play_again",
        }
    }
}

/// Whether a command changed the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandStatus {
    #[default]
    Applied,
    /// The command was not valid in the current phase and did nothing.
    Ignored(IgnoredReason),
}

impl CommandStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandStatus::Applied)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IgnoredReason {
    NotStarted,
    GameOver,
    RollInProgress,
    AutomatedPlayer,
    PlayerResting,
    NoPreviousSession,
}

impl IgnoredReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoredReason::NotStarted => "not_started",
            IgnoredReason::GameOver => "game_over",
            IgnoredReason::RollInProgress => "roll_in_progress",
            IgnoredReason::AutomatedPlayer => "automated_player",
            IgnoredReason::PlayerResting => "player_resting",
            IgnoredReason::NoPreviousSession => "no_previous_session",
        }
    }
}

/// One resolved roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub player: PlayerId,
    pub automated: bool,
    /// Raw die value, as shown to players.
    pub roll: u32,
    pub modified: ModifiedRoll,
    pub from: u32,
    /// Square reached by the die movement, before any effect.
    pub landed: u32,
    pub effect: Option<EffectEvent>,
    /// Position after the effect.
    pub end: u32,
    /// Winner decided by this roll, which may be another player moved by an effect.
    pub winner: Option<PlayerId>,
}

/// A turn given up to rest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedTurn {
    pub player: PlayerId,
    pub rest_turns_remaining: u32,
}

/// Advisory notification for presentation adapters.
///
/// Notifications never feed back into game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Notification {
    TurnStarted {
        player: PlayerId,
        player_name: String,
        automated: bool,
    },
    DiceRolled {
        player: PlayerId,
        value: u32,
    },
    Effect(EffectEvent),
    RestTriggered {
        player: PlayerId,
        player_name: String,
        rest_turns_remaining: u32,
        rest_reason: String,
    },
    GameOver {
        winner: PlayerId,
        winner_name: String,
    },
}

/// Everything one command did, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub status: CommandStatus,
    /// Rolls resolved, including automated continuations.
    pub records: Vec<TurnRecord>,
    /// Phases entered, in order.
    pub phases: Vec<TurnPhase>,
    pub skipped: Vec<SkippedTurn>,
    pub notifications: Vec<Notification>,
}

impl TurnOutcome {
    pub(super) fn ignored(reason: IgnoredReason) -> Self {
        Self {
            status: CommandStatus::Ignored(reason),
            ..Self::default()
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status.is_applied()
    }

    pub(super) fn enter(&mut self, phase: TurnPhase) {
        self.phases.push(phase);
    }

    pub(super) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
