//! Text and JSON rendering of runtime events and snapshots.
use anyhow::Result;

use game_core::{Notification, PlayerId};
use runtime::{Event, SessionEvent, SessionSnapshot};

/// Output format selected by `SUGOROKU_JSON_EVENTS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    Text,
    Json,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    /// Renders one event. `snapshot` is the session after the command and
    /// supplies player names.
    pub fn event(&self, event: &Event, snapshot: &SessionSnapshot) -> Result<String> {
        match self {
            Renderer::Json => Ok(serde_json::to_string(event)?),
            Renderer::Text => Ok(describe(event, snapshot)),
        }
    }

    pub fn status(&self, snapshot: &SessionSnapshot) -> Result<String> {
        match self {
            Renderer::Json => Ok(serde_json::to_string(snapshot)?),
            Renderer::Text => Ok(status_text(snapshot)),
        }
    }
}

fn player_name(snapshot: &SessionSnapshot, id: PlayerId) -> &str {
    snapshot
        .players
        .iter()
        .find(|player| player.id == id)
        .map_or("?", |player| player.name.as_str())
}

fn describe(event: &Event, snapshot: &SessionSnapshot) -> String {
    match event {
        Event::Session(SessionEvent::Started { settings, seed }) => format!(
            "New game: {} on {} (seed {seed})",
            settings.mode, settings.difficulty
        ),
        Event::Session(SessionEvent::Discarded) => "Back at the menu.".to_string(),
        Event::Session(SessionEvent::CommandIgnored { command, reason }) => {
            format!("({} ignored: {})", command.as_str(), reason.as_str())
        }
        Event::Notification(notification) => match notification {
            Notification::TurnStarted {
                player_name,
                automated: true,
                ..
            } => format!("-- {player_name}'s turn (automated)"),
            Notification::TurnStarted { player_name, .. } => {
                format!("-- {player_name}'s turn, press r to roll")
            }
            Notification::DiceRolled { player, value } => {
                format!("{} rolled {value}", player_name(snapshot, *player))
            }
            Notification::Effect(effect) => format!(
                "[{}] {} on square {}: {}",
                effect.tone.as_str(),
                player_name(snapshot, effect.player),
                effect.square,
                effect.message
            ),
            Notification::RestTriggered {
                player_name,
                rest_turns_remaining,
                rest_reason,
                ..
            } => format!(
                "{player_name} sits this turn out ({rest_reason}), {rest_turns_remaining} left"
            ),
            Notification::GameOver { winner_name, .. } => {
                format!("*** {winner_name} reached the goal and wins! (n: play again, m: menu)")
            }
        },
    }
}

fn status_text(snapshot: &SessionSnapshot) -> String {
    let Some(board) = snapshot.board.as_ref().filter(|_| snapshot.started) else {
        return "No game in progress (n: new game, q: quit)".to_string();
    };

    let mut lines = vec![format!(
        "Phase: {} | last roll: {}",
        snapshot.phase.as_str(),
        snapshot.last_roll
    )];

    for (index, player) in snapshot.players.iter().enumerate() {
        let marker = if index == snapshot.current_player_index { '>' } else { ' ' };
        let square = board
            .square(player.position)
            .map_or("?", |square| square.name.as_str());

        let mut line = format!(
            "{marker} {:<10} {:>3}/{} {square}",
            player.name,
            player.position,
            board.last_index()
        );
        if player.is_resting() {
            line.push_str(&format!(" [rest {}]", player.rest_turns_remaining));
        }
        if player.is_cursed() {
            line.push_str(&format!(" [curse {}]", player.curse_turns_remaining));
        }
        if player.is_confused() {
            line.push_str(&format!(" [confusion {}]", player.confusion_turns_remaining));
        }
        lines.push(line);
    }

    if let Some(winner) = snapshot.winner_player() {
        lines.push(format!("Winner: {}", winner.name));
    }
    lines.join("\n")
}
