//! Client configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use game_core::{Difficulty, GameMode};

/// Configuration required to bootstrap the runtime and the terminal loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Fixed seed for every session; random when unset.
    pub seed: Option<u64>,
    /// Custom board served for every difficulty.
    pub board_file: Option<PathBuf>,
    /// TOML file overriding the default tunables.
    pub config_file: Option<PathBuf>,
    /// Print events as JSON lines instead of text.
    pub json_events: bool,
    pub session_id: Option<String>,
    pub event_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsAi,
            difficulty: Difficulty::Normal,
            seed: None,
            board_file: None,
            config_file: None,
            json_events: false,
            session_id: None,
            event_buffer: 100,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SUGOROKU_MODE` - `two_player`, `vs_ai` or `party:<humans>+<automated>` (default: vs_ai)
    /// - `SUGOROKU_DIFFICULTY` - `easy`, `normal` or `hard` (default: normal)
    /// - `SUGOROKU_SEED` - Fixed session seed (default: random)
    /// - `SUGOROKU_BOARD_FILE` - RON board used for every difficulty
    /// - `SUGOROKU_CONFIG_FILE` - TOML game configuration
    /// - `SUGOROKU_JSON_EVENTS` - Print events as JSON lines (default: false)
    /// - `SUGOROKU_SESSION_ID` - Log directory name (default: timestamp)
    /// - `SUGOROKU_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = lookup("SUGOROKU_MODE") {
            config.mode = parse_mode(&mode)?;
        }
        if let Some(difficulty) = lookup("SUGOROKU_DIFFICULTY") {
            config.difficulty = difficulty
                .trim()
                .parse()
                .with_context(|| format!("Unknown difficulty '{difficulty}'"))?;
        }
        if let Some(seed) = lookup("SUGOROKU_SEED") {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("Invalid seed '{seed}'"))?,
            );
        }

        config.board_file = lookup("SUGOROKU_BOARD_FILE").map(PathBuf::from);
        config.config_file = lookup("SUGOROKU_CONFIG_FILE").map(PathBuf::from);
        config.session_id = lookup("SUGOROKU_SESSION_ID");

        // Setting the variable without a value also enables it
        if let Some(flag) = lookup("SUGOROKU_JSON_EVENTS") {
            config.json_events = flag.is_empty() || flag.parse().unwrap_or(false);
        }
        if let Some(capacity) = lookup("SUGOROKU_EVENT_BUFFER").and_then(|v| v.parse().ok()) {
            config.event_buffer = usize::max(capacity, 1);
        }

        Ok(config)
    }
}

/// Parses `two_player`, `vs_ai` or `party:<humans>+<automated>`.
pub fn parse_mode(value: &str) -> Result<GameMode> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "two_player" => return Ok(GameMode::TwoPlayer),
        "vs_ai" => return Ok(GameMode::VsAi),
        _ => {}
    }

    let Some(seats) = value.strip_prefix("party:") else {
        bail!("Unknown game mode '{value}'");
    };
    let (humans, automated) = seats
        .split_once('+')
        .with_context(|| format!("Party mode must look like party:2+1, got '{value}'"))?;

    Ok(GameMode::Party {
        humans: humans.parse().context("Invalid human seat count")?,
        automated: automated.parse().context("Invalid automated seat count")?,
    })
}
