//! Configuration schema for the planner, simulator and event logging.
//!
//! Every section is optional in YAML; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::StrategyError;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Die and hand shape.
    #[serde(default)]
    pub dice: DiceConfig,
    /// Planner settings.
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// Turn simulation settings.
    #[serde(default)]
    pub sim: SimConfig,
    /// NDJSON event logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiceConfig {
    #[serde(default = "default_num_die_sides")]
    pub num_die_sides: u8,
    /// Dice per hand when rolling fresh hands (simulation).
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
}

fn default_num_die_sides() -> u8 {
    6
}

fn default_hand_size() -> usize {
    5
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            num_die_sides: default_num_die_sides(),
            hand_size: default_hand_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrategyConfig {
    /// Evaluate holds on the rayon pool. Results are identical either way.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Refuse hands whose full reroll would exceed this many dice.
    ///
    /// Outcome enumeration is `sides^free`; this bounds latency. `null` = no cap.
    #[serde(default = "default_max_free_dice")]
    pub max_free_dice: Option<usize>,
}

fn default_parallel() -> bool {
    true
}

fn default_max_free_dice() -> Option<usize> {
    Some(8)
}

impl StrategyConfig {
    /// Reject rerolling more than `max_free_dice` dice.
    pub fn check_free_dice(&self, free: usize) -> Result<(), StrategyError> {
        match self.max_free_dice {
            Some(max) if free > max => Err(StrategyError::TooManyFreeDice { free, max }),
            _ => Ok(()),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            max_free_dice: default_max_free_dice(),
        }
    }
}

/// Dice source for simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceKind {
    /// Event-keyed SplitMix64 stream; reproducible per (seed, game, roll).
    #[default]
    Deterministic,
    /// Seeded ChaCha8 PRNG.
    Rng,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default = "default_sim_games")]
    pub games: u32,
    #[serde(default)]
    pub seed: u64,
    /// Rerolls per turn; each one is preceded by a planner decision.
    #[serde(default = "default_sim_rerolls")]
    pub rerolls: u32,
    #[serde(default)]
    pub chance: ChanceKind,
}

fn default_sim_games() -> u32 {
    1000
}

fn default_sim_rerolls() -> u32 {
    1
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: default_sim_games(),
            seed: 0,
            rerolls: default_sim_rerolls(),
            chance: ChanceKind::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append NDJSON events here when set.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush every N lines (0 disables periodic flushing).
    #[serde(default = "default_flush_every")]
    pub flush_every: u64,
    /// Print the ranked hold table to stderr.
    #[serde(default)]
    pub debug: bool,
}

fn default_flush_every() -> u64 {
    100
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every: default_flush_every(),
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice.num_die_sides < 1 {
            return Err(ConfigError::Invalid("dice.num_die_sides must be >= 1".into()));
        }
        if self.dice.hand_size < 1 {
            return Err(ConfigError::Invalid("dice.hand_size must be >= 1".into()));
        }
        if self.sim.games < 1 {
            return Err(ConfigError::Invalid("sim.games must be >= 1".into()));
        }
        if let Some(max) = self.strategy.max_free_dice {
            if self.dice.hand_size > max {
                return Err(ConfigError::Invalid(format!(
                    "dice.hand_size ({}) exceeds strategy.max_free_dice ({max})",
                    self.dice.hand_size
                )));
            }
        }
        Ok(())
    }
}
