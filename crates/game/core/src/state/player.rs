//! Player registry: participants and their per-turn status.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::engine::ExecuteError;

use super::GameMode;

/// Stable participant identifier, unique for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Participants in turn order. Order is fixed for the session lifetime.
pub type Roster = ArrayVec<Player, { GameConfig::MAX_PLAYERS }>;

/// Token colors handed out in seat order. Display only.
const PALETTE: [&str; GameConfig::MAX_PLAYERS] = ["#3b82f6", "#ef4444", "#22c55e", "#eab308"];

/// A participant and their mutable per-turn state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Current square, always within `[0, last_index]`.
    pub position: u32,
    pub color: String,
    /// Rolls are triggered by the engine instead of by user command.
    pub automated: bool,
    /// Own turns that will be skipped without rolling.
    pub rest_turns_remaining: u32,
    pub rest_reason: String,
    /// Own turns during which movement is halved.
    pub curse_turns_remaining: u32,
    /// Own turns during which movement direction is a coin flip.
    pub confusion_turns_remaining: u32,
    /// Position at the start of this player's latest roll.
    pub previous_position: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            color: color.into(),
            automated: false,
            rest_turns_remaining: 0,
            rest_reason: String::new(),
            curse_turns_remaining: 0,
            confusion_turns_remaining: 0,
            previous_position: 0,
        }
    }

    #[must_use]
    pub fn automated(mut self) -> Self {
        self.automated = true;
        self
    }

    #[must_use]
    pub fn at(mut self, position: u32) -> Self {
        self.position = position;
        self.previous_position = position;
        self
    }

    pub fn is_resting(&self) -> bool {
        self.rest_turns_remaining > 0
    }

    pub fn is_cursed(&self) -> bool {
        self.curse_turns_remaining > 0
    }

    pub fn is_confused(&self) -> bool {
        self.confusion_turns_remaining > 0
    }
}

/// Builds the participants for `mode` in turn order.
///
/// Humans are seated first, automated players after them. Every player starts
/// on square 0 with cleared counters.
pub fn init_players(mode: GameMode) -> Result<Roster, ExecuteError> {
    let (humans, automated) = mode.seats();
    let total = humans + automated;

    if !(GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS).contains(&total) {
        return Err(ExecuteError::InvalidPartySize { requested: total });
    }
    if humans == 0 {
        return Err(ExecuteError::NoHumanPlayers);
    }

    let mut roster = Roster::new();
    for seat in 0..total {
        let id = PlayerId(seat as u32 + 1);
        let color = PALETTE[seat];
        let player = if seat < humans {
            Player::new(id, format!("Player {}", seat + 1), color)
        } else if automated == 1 {
            Player::new(id, "AI", color).automated()
        } else {
            Player::new(id, format!("AI {}", seat - humans + 1), color).automated()
        };
        roster.push(player);
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_player_mode_seats_two_humans() {
        let roster = init_players(GameMode::TwoPlayer).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|p| !p.automated && p.position == 0));
        assert_ne!(roster[0].id, roster[1].id);
        assert_ne!(roster[0].color, roster[1].color);
    }

    #[test]
    fn vs_ai_mode_automates_exactly_one_player() {
        let roster = init_players(GameMode::VsAi).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.iter().filter(|p| p.automated).count(), 1);
        assert!(!roster[0].automated);
        assert_eq!(roster[1].name, "AI");
    }

    #[test]
    fn party_mode_validates_seat_count() {
        let roster = init_players(GameMode::Party {
            humans: 2,
            automated: 2,
        })
        .unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[3].name, "AI 2");

        assert_eq!(
            init_players(GameMode::Party {
                humans: 1,
                automated: 0
            }),
            Err(ExecuteError::InvalidPartySize { requested: 1 })
        );
        assert_eq!(
            init_players(GameMode::Party {
                humans: 3,
                automated: 2
            }),
            Err(ExecuteError::InvalidPartySize { requested: 5 })
        );
        assert_eq!(
            init_players(GameMode::Party {
                humans: 0,
                automated: 2
            }),
            Err(ExecuteError::NoHumanPlayers)
        );
    }
}
