//! Session worker that owns the authoritative [`game_core::GameSession`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! them via [`game_core::GameEngine`], and publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use game_core::{Command as GameCommand, GameEngine, GameSession, SessionSettings, TurnOutcome};

use crate::api::{Result, SessionSnapshot};
use crate::events::{EventBus, extract_events};
use crate::oracle::OracleManager;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Start a session; the worker chooses the seed.
    StartGame {
        settings: SessionSettings,
        reply: oneshot::Sender<Result<TurnOutcome>>,
    },
    /// Execute an engine command against the current session.
    Execute {
        command: GameCommand,
        reply: oneshot::Sender<Result<TurnOutcome>>,
    },
    /// Query the current session (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Background task that processes gameplay commands.
///
/// Commands are handled strictly in arrival order, so a roll request that
/// arrives while another command is being resolved waits its turn and is
/// then judged against the committed state.
pub struct SessionWorker {
    session: GameSession,
    oracles: OracleManager,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    fixed_seed: Option<u64>,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        oracles: OracleManager,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        fixed_seed: Option<u64>,
    ) -> Self {
        info!(
            boards = oracles.boards().len(),
            dice_sides = oracles.config().dice_sides,
            fixed_seed = fixed_seed.is_some(),
            "SessionWorker initialized"
        );

        Self {
            session: GameSession::default(),
            oracles,
            command_rx,
            event_bus,
            fixed_seed,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("SessionWorker command channel closed, exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::StartGame { settings, reply } => {
                let seed = self.fixed_seed.unwrap_or_else(rand::random);
                let result = self.execute(GameCommand::StartGame { settings, seed });
                if reply.send(result).is_err() {
                    debug!("StartGame reply channel closed (caller dropped)");
                }
            }
            Command::Execute { command, reply } => {
                let result = self.execute(command);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(SessionSnapshot::from(&self.session)).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Executes one engine command and publishes the resulting events.
    ///
    /// This is the ONLY method that should call `GameEngine::execute()`.
    fn execute(&mut self, command: GameCommand) -> Result<TurnOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = match GameEngine::new(&mut self.session).execute(env, &command) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    command = command.as_str(),
                    error = %error,
                    "command rejected"
                );
                return Err(error.into());
            }
        };

        for event in extract_events(&command, &outcome, &self.session) {
            self.event_bus.publish(event);
        }

        Ok(outcome)
    }
}
