//! Turn engine: the authoritative reducer for [`GameSession`].
//!
//! [`GameEngine`] borrows the session mutably and resolves one [`Command`] to
//! completion before returning, including any automated rolls the command
//! unlocks. Automated rolls are continuations: each one runs only after the
//! previous transition has been committed, and they are drained iteratively
//! rather than by recursion.
//!
//! ```text
//! NotStarted → AwaitingRoll → Resolving → (AwaitingRoll | GameOver)
//! ```

mod errors;
mod outcome;
mod resolution;
mod turns;

pub use errors::ExecuteError;
pub use outcome::{
    Command, CommandStatus, IgnoredReason, Notification, SkippedTurn, TurnOutcome, TurnRecord,
};

use crate::env::{GameEnv, compute_seed};
use crate::state::{GameSession, PlayerId, SessionSettings, TurnPhase, init_players};

/// Work the engine schedules for itself once a transition is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    AutomatedRoll(PlayerId),
}

/// Game engine that owns command execution and turn flow.
pub struct GameEngine<'a> {
    session: &'a mut GameSession,
}

impl<'a> GameEngine<'a> {
    pub fn new(session: &'a mut GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        self.session
    }

    /// Executes `command` against the session.
    ///
    /// Errors only come from starting a session; the session is left
    /// untouched in that case.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        command: &Command,
    ) -> Result<TurnOutcome, ExecuteError> {
        let outcome = match *command {
            Command::StartGame { settings, seed } => self.start_game(env, settings, seed)?,
            Command::RequestRoll => self.request_roll(env),
            Command::ReturnToMenu => self.return_to_menu(),
            Command::PlayAgain => self.play_again(env)?,
        };

        if let CommandStatus::Ignored(reason) = outcome.status {
            tracing::debug!(
                command = command.as_str(),
                reason = reason.as_str(),
                phase = self.session.phase.as_str(),
                "command ignored"
            );
        }

        Ok(outcome)
    }

    fn start_game(
        &mut self,
        env: GameEnv<'_>,
        settings: SessionSettings,
        seed: u64,
    ) -> Result<TurnOutcome, ExecuteError> {
        let board = env.boards().board(settings.difficulty)?;
        let players = init_players(settings.mode)?;
        *self.session = GameSession::new(settings, board, players, seed);

        tracing::info!(
            mode = %settings.mode,
            difficulty = settings.difficulty.as_str(),
            squares = self.session.board.as_ref().map_or(0, |board| board.len()),
            seed,
            "session started"
        );

        let mut outcome = TurnOutcome::default();
        outcome.enter(TurnPhase::AwaitingRoll);
        self.announce_turn(&mut outcome);
        self.run_continuations(env, &mut outcome);
        Ok(outcome)
    }

    fn request_roll(&mut self, env: GameEnv<'_>) -> TurnOutcome {
        let reason = match self.session.phase {
            TurnPhase::NotStarted => Some(IgnoredReason::NotStarted),
            TurnPhase::GameOver => Some(IgnoredReason::GameOver),
            TurnPhase::Resolving => Some(IgnoredReason::RollInProgress),
            TurnPhase::AwaitingRoll => match self.session.current_player() {
                None => Some(IgnoredReason::NotStarted),
                Some(player) if player.automated => Some(IgnoredReason::AutomatedPlayer),
                Some(player) if player.is_resting() => Some(IgnoredReason::PlayerResting),
                Some(_) => None,
            },
        };
        if let Some(reason) = reason {
            return TurnOutcome::ignored(reason);
        }

        let mut outcome = TurnOutcome::default();
        self.resolve_roll(env, &mut outcome);
        self.run_continuations(env, &mut outcome);
        outcome
    }

    fn return_to_menu(&mut self) -> TurnOutcome {
        if self.session.started() {
            tracing::info!(phase = self.session.phase.as_str(), "session discarded");
        }
        *self.session = GameSession::default();

        let mut outcome = TurnOutcome::default();
        outcome.enter(TurnPhase::NotStarted);
        outcome
    }

    fn play_again(&mut self, env: GameEnv<'_>) -> Result<TurnOutcome, ExecuteError> {
        let Some(settings) = self.session.settings else {
            return Ok(TurnOutcome::ignored(IgnoredReason::NoPreviousSession));
        };
        let seed = compute_seed(self.session.seed, self.session.nonce, u32::MAX, 0);
        self.start_game(env, settings, seed)
    }

    /// Automated roll owed by the engine, if any.
    fn next_continuation(&self) -> Option<Continuation> {
        if self.session.phase != TurnPhase::AwaitingRoll {
            return None;
        }
        let player = self.session.current_player()?;
        (player.automated && !player.is_resting()).then_some(Continuation::AutomatedRoll(player.id))
    }

    /// Drains automated rolls until a human is to move or the game ends.
    ///
    /// Terminates because every session seats at least one human and every
    /// rest cascade consumes a rest turn per pass.
    fn run_continuations(&mut self, env: GameEnv<'_>, outcome: &mut TurnOutcome) {
        while let Some(Continuation::AutomatedRoll(player)) = self.next_continuation() {
            tracing::debug!(%player, nonce = self.session.nonce, "automated roll");
            self.resolve_roll(env, outcome);
        }
    }
}

/// Applies `command` to an owned session and returns the successor state.
///
/// On error the input is dropped; callers that need it keep their own copy.
pub fn reduce(
    mut session: GameSession,
    command: &Command,
    env: GameEnv<'_>,
) -> Result<(GameSession, TurnOutcome), ExecuteError> {
    let outcome = GameEngine::new(&mut session).execute(env, command)?;
    Ok((session, outcome))
}
