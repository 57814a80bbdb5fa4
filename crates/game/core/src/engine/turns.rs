use crate::state::TurnPhase;

use super::{GameEngine, Notification, SkippedTurn, TurnOutcome};

impl GameEngine<'_> {
    /// Passes the turn, skipping players who are resting.
    ///
    /// Each skipped player consumes one rest turn, so the loop ends even when
    /// every player is resting.
    pub(super) fn advance_turn(&mut self, outcome: &mut TurnOutcome) {
        let session = &mut *self.session;
        let len = session.players.len();
        if len == 0 {
            return;
        }

        session.phase = TurnPhase::AwaitingRoll;
        outcome.enter(TurnPhase::AwaitingRoll);

        loop {
            session.current_player_index = (session.current_player_index + 1) % len;
            let player = &mut session.players[session.current_player_index];
            if !player.is_resting() {
                break;
            }

            player.rest_turns_remaining -= 1;
            let rest_reason = if player.rest_turns_remaining == 0 {
                std::mem::take(&mut player.rest_reason)
            } else {
                player.rest_reason.clone()
            };

            tracing::debug!(
                player = %player.id,
                remaining = player.rest_turns_remaining,
                "turn skipped while resting"
            );
            outcome.skipped.push(SkippedTurn {
                player: player.id,
                rest_turns_remaining: player.rest_turns_remaining,
            });
            outcome.notify(Notification::RestTriggered {
                player: player.id,
                player_name: player.name.clone(),
                rest_turns_remaining: player.rest_turns_remaining,
                rest_reason,
            });
        }

        self.announce_turn(outcome);
    }

    pub(super) fn announce_turn(&self, outcome: &mut TurnOutcome) {
        if let Some(player) = self.session.current_player() {
            outcome.notify(Notification::TurnStarted {
                player: player.id,
                player_name: player.name.clone(),
                automated: player.automated,
            });
        }
    }
}
