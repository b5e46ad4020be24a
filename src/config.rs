//! Game configuration.

use crate::games::noughts::Role;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who takes the first move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// Coin flip at the start of the game.
    #[default]
    Random,
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
}

/// Settings for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Who takes the first move.
    #[serde(default)]
    first: FirstMover,

    /// Seed for the first-mover coin flip.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(first: FirstMover, seed: Option<u64>) -> Self {
        Self { first, seed }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = ?config.first, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, first: Option<FirstMover>, seed: Option<u64>) -> Self {
        if let Some(first) = first {
            self.first = first;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Resolves the first mover, flipping a coin when configured as random.
    #[instrument(skip(self), fields(first = ?self.first, seed = ?self.seed))]
    pub fn resolve_first(&self) -> Role {
        let role = match self.first {
            FirstMover::Human => Role::Human,
            FirstMover::Computer => Role::Computer,
            FirstMover::Random => {
                let heads = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed).gen_bool(0.5),
                    None => rand::thread_rng().gen_bool(0.5),
                };
                if heads { Role::Computer } else { Role::Human }
            }
        };
        debug!(%role, "First mover resolved");
        role
    }
}

/// A game config file that could not be read or parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Game config error: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What went wrong with the config file.
    pub message: String,
    /// Line in this crate that raised the error.
    pub line: u32,
    /// Source file in this crate that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Records the message with the location of the failing load step.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
