//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.trivia/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::curve::DEFAULT_QUESTIONS_TO_WIN;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub questions_to_win: Option<u32>,
    pub reveal_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Pause between revealing an answer and moving on.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub questions_to_win: u32,
    pub reveal_delay_ms: u64,
    /// None = seed from entropy.
    pub seed: Option<u64>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub reveal_delay_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trivia/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trivia").join("config.toml"))
}

/// Load config from `~/.trivia/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TriviaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TriviaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TriviaConfig::default());
        }
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<TriviaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TriviaConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TriviaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Trivia Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# questions_to_win = 15     # Or TRIVIA_QUESTIONS_TO_WIN
# reveal_delay_ms = 500     # Or TRIVIA_REVEAL_DELAY_MS / --reveal-delay-ms
# seed = 42                 # Or TRIVIA_SEED / --seed; omit for a random game
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TriviaConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &TriviaConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let parsed_env = |key: &str| {
        env(key).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", key, raw, e);
                None
            }
        })
    };

    // Questions to win: env → config → default, zero rejected
    let questions_to_win = parsed_env("TRIVIA_QUESTIONS_TO_WIN")
        .and_then(|v| u32::try_from(v).ok())
        .or(config.game.questions_to_win)
        .unwrap_or(DEFAULT_QUESTIONS_TO_WIN);
    let questions_to_win = if questions_to_win == 0 {
        warn!(
            "questions_to_win must be at least 1, using {}",
            DEFAULT_QUESTIONS_TO_WIN
        );
        DEFAULT_QUESTIONS_TO_WIN
    } else {
        questions_to_win
    };

    // Reveal delay: CLI → env → config → default
    let reveal_delay_ms = cli
        .reveal_delay_ms
        .or_else(|| parsed_env("TRIVIA_REVEAL_DELAY_MS"))
        .or(config.game.reveal_delay_ms)
        .unwrap_or(DEFAULT_REVEAL_DELAY_MS);

    // Seed: CLI → env → config → entropy
    let seed = cli
        .seed
        .or_else(|| parsed_env("TRIVIA_SEED"))
        .or(config.game.seed);

    ResolvedConfig {
        questions_to_win,
        reveal_delay_ms,
        seed,
    }
}
