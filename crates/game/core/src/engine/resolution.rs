//! Roll resolution: die, modifiers, movement, goal checks, effects.

use crate::effect::{EffectContext, apply_effect, apply_roll_modifiers};
use crate::env::{DrawStream, GameEnv};
use crate::state::{PlayerId, TurnPhase};

use super::{GameEngine, Notification, TurnOutcome, TurnRecord};

impl GameEngine<'_> {
    /// Resolves one roll for the current player and commits the result.
    ///
    /// Callers have already checked that a roll is valid.
    pub(super) fn resolve_roll(&mut self, env: GameEnv<'_>, outcome: &mut TurnOutcome) {
        let session = &mut *self.session;
        let Some(board) = session.board.as_ref() else {
            return;
        };
        let acting = session.current_player_index;
        let Some(player) = session.players.get_mut(acting) else {
            return;
        };

        session.phase = TurnPhase::Resolving;
        outcome.enter(TurnPhase::Resolving);

        let mut draws = DrawStream::new(env.rng(), session.seed, session.nonce, player.id.0);
        session.nonce += 1;

        let roll = draws.roll_die(env.config().dice_sides);
        session.last_roll = roll;
        outcome.notify(Notification::DiceRolled {
            player: player.id,
            value: roll,
        });

        let from = player.position;
        player.previous_position = from;
        let modified = apply_roll_modifiers(player, roll, &mut draws);
        player.position = board.clamp(i64::from(from) + i64::from(modified.movement));

        let mut record = TurnRecord {
            player: player.id,
            automated: player.automated,
            roll,
            modified,
            from,
            landed: player.position,
            effect: None,
            end: player.position,
            winner: None,
        };

        tracing::debug!(
            player = %player.id,
            roll,
            movement = modified.movement,
            from,
            to = player.position,
            "roll resolved"
        );

        let last = board.last_index();
        if player.position >= last {
            let winner = player.id;
            record.winner = Some(winner);
            outcome.records.push(record);
            self.declare_winner(winner, outcome);
            return;
        }

        if let Some(square) = board.square(player.position) {
            let mut ctx = EffectContext::new(board, env.config(), &mut draws);
            let players = std::mem::take(&mut session.players);
            let (players, event) = apply_effect(players, acting, square, &mut ctx);
            session.players = players;

            if let Some(event) = event {
                session.last_event = Some(event.clone());
                outcome.notify(Notification::Effect(event.clone()));
                record.effect = Some(event);
            }
        }
        record.end = session.players[acting].position;

        // Effects can carry anyone onto the goal; the actor is checked first.
        let len = session.players.len();
        let winner = (0..len)
            .map(|offset| (acting + offset) % len)
            .map(|index| &session.players[index])
            .find(|player| player.position >= last)
            .map(|player| player.id);

        record.winner = winner;
        outcome.records.push(record);

        match winner {
            Some(winner) => self.declare_winner(winner, outcome),
            None => self.advance_turn(outcome),
        }
    }

    /// Ends the session. No position or turn changes follow.
    fn declare_winner(&mut self, winner: PlayerId, outcome: &mut TurnOutcome) {
        let session = &mut *self.session;
        session.phase = TurnPhase::GameOver;
        session.winner = Some(winner);
        outcome.enter(TurnPhase::GameOver);

        let winner_name = session
            .player(winner)
            .map(|player| player.name.clone())
            .unwrap_or_default();
        tracing::info!(%winner, name = %winner_name, rolls = session.nonce, "game over");
        outcome.notify(Notification::GameOver {
            winner,
            winner_name,
        });
    }
}
