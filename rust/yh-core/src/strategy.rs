//! Hold selection: pick the hold with the highest expected score.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::StrategyConfig;
use crate::dice::{validate_hand, Face, Hold};
use crate::error::StrategyError;
use crate::expectation::expected_value;
use crate::holds::generate_holds;

/// Best expected score for a hand and a hold achieving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResult {
    pub expected_value: f64,
    pub hold: Hold,
}

/// One evaluated hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldEval {
    pub hold: Hold,
    pub num_free_dice: usize,
    pub expected_value: f64,
}

/// Preference order between two evaluated holds (`Greater` = `a` preferred).
///
/// Higher expected value wins; exact ties go to the lexicographically smaller
/// canonical hold. No two distinct holds compare `Equal`, so the winner does
/// not depend on evaluation order.
pub fn prefer(a: &HoldEval, b: &HoldEval) -> Ordering {
    a.expected_value
        .total_cmp(&b.expected_value)
        .then_with(|| b.hold.cmp(&a.hold))
}

/// Configurable hold planner.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    cfg: StrategyConfig,
}

impl Planner {
    pub fn new(cfg: StrategyConfig) -> Self {
        Self { cfg }
    }

    /// Evaluate every hold of `hand`, best first.
    pub fn rank_holds(
        &self,
        hand: &[Face],
        num_die_sides: u8,
    ) -> Result<Vec<HoldEval>, StrategyError> {
        let mut evals = self.evaluate_all(hand, num_die_sides)?;
        evals.sort_by(|a, b| prefer(b, a));
        Ok(evals)
    }

    /// The hold maximizing expected score after one reroll.
    pub fn best_hold(
        &self,
        hand: &[Face],
        num_die_sides: u8,
    ) -> Result<StrategyResult, StrategyError> {
        let evals = self.evaluate_all(hand, num_die_sides)?;
        let best = evals
            .into_iter()
            .max_by(prefer)
            .ok_or(StrategyError::EmptyHand)?;
        Ok(StrategyResult {
            expected_value: best.expected_value,
            hold: best.hold,
        })
    }

    fn evaluate_all(
        &self,
        hand: &[Face],
        num_die_sides: u8,
    ) -> Result<Vec<HoldEval>, StrategyError> {
        validate_hand(hand, num_die_sides)?;
        // The empty hold rerolls the whole hand.
        self.cfg.check_free_dice(hand.len())?;

        let holds = generate_holds(hand);
        let eval = |hold: &Hold| -> Result<HoldEval, StrategyError> {
            let num_free_dice = hand.len() - hold.len();
            Ok(HoldEval {
                expected_value: expected_value(hold.dice(), num_die_sides, num_free_dice)?,
                hold: hold.clone(),
                num_free_dice,
            })
        };

        if self.cfg.parallel {
            holds.par_iter().map(eval).collect()
        } else {
            holds.iter().map(eval).collect()
        }
    }
}

/// Best hold for `hand` using the default planner.
///
/// Returns the maximal expected score and the hold achieving it; ties resolve
/// as described in [`prefer`].
pub fn strategy(hand: &[Face], num_die_sides: u8) -> Result<StrategyResult, StrategyError> {
    Planner::default().best_hold(hand, num_die_sides)
}
