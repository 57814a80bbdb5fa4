//! Event extraction from command outcomes.
//!
//! Converts the [`TurnOutcome`] of one engine command into the ordered list of
//! bus events the worker publishes.

use game_core::{Command, CommandStatus, GameSession, TurnOutcome};

use super::bus::Event;
use super::types::SessionEvent;

/// Extract bus events from the outcome of `command`.
///
/// # Event Ordering
///
/// 1. Lifecycle event for the command (started, discarded, ignored)
/// 2. Engine notifications in the order they were produced
///
/// `session` is the state after the command. Its settings and seed are
/// reported on `Started` so observers can replay the game.
pub fn extract_events(
    command: &Command,
    outcome: &TurnOutcome,
    session: &GameSession,
) -> Vec<Event> {
    if let CommandStatus::Ignored(reason) = outcome.status {
        return vec![Event::Session(SessionEvent::CommandIgnored {
            command: *command,
            reason,
        })];
    }

    let mut events = Vec::with_capacity(outcome.notifications.len() + 1);

    match command {
        Command::StartGame { .. } | Command::PlayAgain => match session.settings {
            Some(settings) => events.push(Event::Session(SessionEvent::Started {
                settings,
                seed: session.seed,
            })),
            None => tracing::warn!(
                target: "runtime::events",
                "{} applied but session has no settings",
                command.as_str()
            ),
        },
        Command::ReturnToMenu => events.push(Event::Session(SessionEvent::Discarded)),
        Command::RequestRoll => {}
    }

    events.extend(
        outcome
            .notifications
            .iter()
            .cloned()
            .map(Event::Notification),
    );
    events
}
