//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the session or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Command as GameCommand, Difficulty, GameMode, SessionSettings, TurnOutcome};

use super::errors::{Result, RuntimeError};
use super::snapshot::SessionSnapshot;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Start a fresh session, replacing any current one.
    ///
    /// Fails without touching the current session when the party is invalid
    /// or no board exists for `difficulty`.
    pub async fn start_game(&self, mode: GameMode, difficulty: Difficulty) -> Result<TurnOutcome> {
        let settings = SessionSettings::new(mode, difficulty);
        self.request(|reply| Command::StartGame { settings, reply })
            .await?
    }

    /// Roll for the current human player. Ignored in any other situation.
    pub async fn request_roll(&self) -> Result<TurnOutcome> {
        self.execute(GameCommand::RequestRoll).await
    }

    /// Discard the session and return to the menu state.
    pub async fn return_to_menu(&self) -> Result<TurnOutcome> {
        self.execute(GameCommand::ReturnToMenu).await
    }

    /// Restart with the previous mode and difficulty.
    pub async fn play_again(&self) -> Result<TurnOutcome> {
        self.execute(GameCommand::PlayAgain).await
    }

    /// Query the current session (read-only snapshot)
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    async fn execute(&self, command: GameCommand) -> Result<TurnOutcome> {
        self.request(|reply| Command::Execute { command, reply })
            .await?
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Session lifecycle, ignored commands, game over
    /// - `Topic::Turn` - Turn starts, dice rolls, effects, rest skips
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut turn_rx = handle.subscribe(Topic::Turn);
    /// while let Ok(event) = turn_rx.recv().await {
    ///     // Render dice and effects
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
