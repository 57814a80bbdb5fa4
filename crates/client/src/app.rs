//! Line-based terminal loop driving the runtime.
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::TryRecvError};

use game_core::Notification;
use runtime::{Event, RuntimeError, RuntimeHandle, Topic};

use crate::config::ClientConfig;
use crate::presentation::Renderer;

const HELP: &str = "Commands: r roll | n new game / play again | m menu | s status | q quit";

pub struct App {
    handle: RuntimeHandle,
    config: ClientConfig,
    renderer: Renderer,
    session_rx: broadcast::Receiver<Event>,
    turn_rx: broadcast::Receiver<Event>,
}

impl App {
    pub fn new(handle: RuntimeHandle, config: ClientConfig) -> Self {
        let mut receivers = handle.subscribe_multiple(&[Topic::Session, Topic::Turn]);
        let mut take = |topic: Topic| {
            receivers
                .remove(&topic)
                .unwrap_or_else(|| handle.subscribe(topic))
        };
        let session_rx = take(Topic::Session);
        let turn_rx = take(Topic::Turn);
        let renderer = Renderer::new(config.json_events);

        Self {
            handle,
            config,
            renderer,
            session_rx,
            turn_rx,
        }
    }

    /// Starts a game with the configured settings, then reads commands from
    /// stdin until `q` or end of input.
    pub async fn run(mut self) -> Result<()> {
        if self.renderer == Renderer::Text {
            println!("{HELP}");
        }
        self.new_game().await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match line.trim() {
                "" => continue,
                "r" => {
                    self.handle.request_roll().await?;
                }
                "n" => self.new_game().await?,
                "m" => {
                    self.handle.return_to_menu().await?;
                }
                "s" => {
                    let snapshot = self.handle.snapshot().await?;
                    println!("{}", self.renderer.status(&snapshot)?);
                }
                "q" => break,
                "h" | "?" => println!("{HELP}"),
                other => println!("Unknown command '{other}'. {HELP}"),
            }
            self.flush_events().await?;
        }

        tracing::info!("Input closed, leaving");
        Ok(())
    }

    /// Replays the previous settings when a session exists, otherwise starts
    /// one from the configured mode and difficulty.
    async fn new_game(&mut self) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        let result = if snapshot.settings.is_some() {
            self.handle.play_again().await
        } else {
            self.handle
                .start_game(self.config.mode, self.config.difficulty)
                .await
        };

        match result {
            Ok(_) => self.flush_events().await,
            Err(error @ RuntimeError::Engine(_)) if error.severity().is_recoverable() => {
                println!("Cannot start a game: {error}");
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Prints everything the last command published.
    ///
    /// Lifecycle events come first and the game-over announcement last, with
    /// turn events in between.
    async fn flush_events(&mut self) -> Result<()> {
        let session = drain(&mut self.session_rx);
        let turn = drain(&mut self.turn_rx);
        let (game_over, lifecycle): (Vec<_>, Vec<_>) = session.into_iter().partition(|event| {
            matches!(event, Event::Notification(Notification::GameOver { .. }))
        });

        let snapshot = self.handle.snapshot().await?;
        for event in lifecycle.iter().chain(&turn).chain(&game_over) {
            println!("{}", self.renderer.event(event, &snapshot)?);
        }
        Ok(())
    }
}

fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event receiver lagged, some events were dropped");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    events
}
