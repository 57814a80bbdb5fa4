//! Space sugoroku terminal client.
//!
//! Composition root that assembles content, runtime and the line-based
//! frontend.
//!
//! # Examples
//!
//! ```bash
//! # Human vs automated player on the hard board
//! SUGOROKU_MODE=vs_ai SUGOROKU_DIFFICULTY=hard cargo run -p sugoroku-client
//!
//! # Four-seat party with JSON event output
//! SUGOROKU_MODE=party:2+2 SUGOROKU_JSON_EVENTS=true cargo run -p sugoroku-client
//! ```
mod app;
mod config;
mod logging;
mod presentation;

use anyhow::{Context, Result};

use game_content::{BoardCatalog, BoardLoader, ConfigLoader};
use game_core::GameConfig;
use runtime::{Runtime, RuntimeConfig};

use app::App;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env()?;
    logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!(
        mode = %config.mode,
        difficulty = %config.difficulty,
        json = config.json_events,
        "Starting sugoroku client"
    );

    let game_config = match &config.config_file {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };

    let boards = match &config.board_file {
        Some(path) => BoardCatalog::single(BoardLoader::load(path)?),
        None => BoardCatalog::builtin().context("Failed to load built-in boards")?,
    };

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            event_buffer_size: config.event_buffer,
            seed: config.seed,
            ..RuntimeConfig::default()
        })
        .boards(boards)
        .build()?;

    App::new(runtime.handle(), config).run().await?;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
