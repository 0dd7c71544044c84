//! yh-core: upper-section dice hold planner.
//!
//! Given a hand of dice, enumerate every hold (sub-multiset to keep), compute
//! the exact expected upper-section score of rerolling the rest, and pick the
//! best hold.
//!
//! ```text
//! hand -> generate_holds -> per hold: generate_outcomes -> score -> expected_value
//!      -> strategy (max, deterministic tie-break)
//! ```

pub mod chance;
pub mod config;
pub mod dice;
pub mod error;
pub mod expectation;
pub mod holds;
pub mod outcomes;
pub mod scoring;
pub mod sim;
pub mod strategy;

mod holds_tests;
mod sim_tests;

pub use config::{
    ChanceKind, Config, ConfigError, DiceConfig, LoggingConfig, SimConfig, StrategyConfig,
};
pub use dice::{parse_dice, validate_faces, validate_hand, Face, Hold};
pub use error::StrategyError;
pub use expectation::expected_value;
pub use holds::{generate_holds, num_holds};
pub use outcomes::{die_faces, generate_outcomes};
pub use scoring::score;
pub use sim::{simulate, simulate_with, SimulationReport, TurnRecord};
pub use strategy::{strategy, HoldEval, Planner, StrategyResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ruleset identifier carried in logged events.
pub const RULESET_ID: &str = "upper_section_v1";
