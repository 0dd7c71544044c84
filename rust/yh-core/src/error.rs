//! Error types for hand validation and planning.

use thiserror::Error;

use crate::dice::Face;

/// Planner input errors.
///
/// Enumeration and scoring are total; only the public entry points that take
/// caller-supplied hands and die counts can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("hand must contain at least one die")]
    EmptyHand,
    #[error("num_die_sides must be >= 1 (got {0})")]
    InvalidDieSides(u8),
    #[error("die face {face} out of range 1..={num_die_sides}")]
    FaceOutOfRange { face: Face, num_die_sides: u8 },
    #[error("hold rerolls {free} dice, above the configured cap of {max}")]
    TooManyFreeDice { free: usize, max: usize },
    #[error("invalid dice list {input:?}: {reason}")]
    ParseDice { input: String, reason: String },
}
