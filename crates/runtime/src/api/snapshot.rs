//! Read-only view of the session handed to presentation adapters.

use serde::{Deserialize, Serialize};

use game_core::{
    Board, EffectEvent, GameSession, Player, PlayerId, SessionSettings, TurnPhase,
};

/// Serializable copy of the session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub started: bool,
    pub is_over: bool,
    pub winner: Option<PlayerId>,
    /// Die value of the most recent roll (0 before the first roll).
    pub last_roll: u32,
    pub is_roll_in_progress: bool,
    pub phase: TurnPhase,
    pub settings: Option<SessionSettings>,
    pub board: Option<Board>,
    pub last_event: Option<EffectEvent>,
    pub seed: u64,
    pub nonce: u64,
}

impl SessionSnapshot {
    pub fn current_player(&self) -> Option<&Player> {
        if !self.started {
            return None;
        }
        self.players.get(self.current_player_index)
    }

    pub fn winner_player(&self) -> Option<&Player> {
        let winner = self.winner?;
        self.players.iter().find(|player| player.id == winner)
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            players: session.players.to_vec(),
            current_player_index: session.current_player_index,
            started: session.started(),
            is_over: session.is_over(),
            winner: session.winner,
            last_roll: session.last_roll,
            is_roll_in_progress: session.is_roll_in_progress(),
            phase: session.phase,
            settings: session.settings,
            board: session.board.clone(),
            last_event: session.last_event.clone(),
            seed: session.seed,
            nonce: session.nonce,
        }
    }
}
