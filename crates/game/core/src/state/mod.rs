//! Canonical session state owned by the turn engine.
//!
//! [`GameSession`] is a plain value: the engine borrows it mutably while a
//! command resolves, and everything else reads clones of it. Nothing in this
//! module mutates state on its own; see [`crate::engine`].

mod player;
mod turn;

pub use player::{Player, PlayerId, Roster, init_players};
pub use turn::{GameMode, SessionSettings, TurnPhase};

use crate::board::Board;
use crate::effect::EffectEvent;

/// Aggregate state of one game, from "start game" until it is discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    pub phase: TurnPhase,
    /// Participants in turn order.
    pub players: Roster,
    pub current_player_index: usize,
    /// Set if and only if `phase == GameOver`.
    pub winner: Option<PlayerId>,
    /// Die value of the most recent roll (0 before the first roll).
    pub last_roll: u32,
    pub settings: Option<SessionSettings>,
    pub board: Option<Board>,
    /// Base seed for every random draw in this session.
    pub seed: u64,
    /// Number of rolls resolved so far.
    pub nonce: u64,
    /// Most recent effect notification, kept for late-joining observers.
    pub last_event: Option<EffectEvent>,
}

impl GameSession {
    /// Creates a session at the start of play.
    pub fn new(settings: SessionSettings, board: Board, players: Roster, seed: u64) -> Self {
        Self {
            phase: TurnPhase::AwaitingRoll,
            players,
            current_player_index: 0,
            winner: None,
            last_roll: 0,
            settings: Some(settings),
            board: Some(board),
            seed,
            nonce: 0,
            last_event: None,
        }
    }

    pub fn started(&self) -> bool {
        self.phase != TurnPhase::NotStarted
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// True while a roll is being resolved.
    pub fn is_roll_in_progress(&self) -> bool {
        self.phase == TurnPhase::Resolving
    }

    pub fn current_player(&self) -> Option<&Player> {
        if !self.started() {
            return None;
        }
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Goal square index, if a board is loaded.
    pub fn last_index(&self) -> Option<u32> {
        self.board.as_ref().map(Board::last_index)
    }

    /// Players standing on `square`.
    pub fn players_on(&self, square: u32) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(move |player| player.position == square)
    }
}
