//! Turn simulation: play upper-section turns with the planner's choices.

use serde::Serialize;

use crate::chance::ChanceMode;
use crate::config::{DiceConfig, SimConfig};
use crate::dice::{validate_die_sides, Face, Hold};
use crate::error::StrategyError;
use crate::scoring::score;
use crate::strategy::Planner;

/// One planner decision inside a simulated turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnDecision {
    pub hand: Vec<Face>,
    pub hold: Hold,
    pub expected_value: f64,
    pub rolled: Vec<Face>,
}

/// A fully played turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnRecord {
    pub game: u64,
    pub opening: Vec<Face>,
    pub decisions: Vec<TurnDecision>,
    pub final_hand: Vec<Face>,
    pub score: u32,
}

impl TurnRecord {
    /// Expected value of the first decision, or the opening score if no reroll happened.
    pub fn opening_expected_value(&self) -> f64 {
        self.decisions
            .first()
            .map(|d| d.expected_value)
            .unwrap_or(self.score as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub mean: f64,
    pub median: u32,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub scores: Vec<u32>,
    pub summary: ScoreSummary,
    /// Mean of the planner's expected value at the first decision of each turn.
    pub mean_opening_expected_value: f64,
}

pub fn summarize_scores(scores: &[u32]) -> ScoreSummary {
    if scores.is_empty() {
        return ScoreSummary {
            mean: 0.0,
            median: 0,
            std_dev: 0.0,
            min: 0,
            max: 0,
        };
    }

    let n = scores.len() as f64;
    let mut sum = 0f64;
    let mut sum_sq = 0f64;
    for &s in scores {
        let sf = s as f64;
        sum += sf;
        sum_sq += sf * sf;
    }
    let mean = sum / n;
    let var = (sum_sq / n) - mean * mean;

    let mut sorted = scores.to_vec();
    sorted.sort_unstable();

    ScoreSummary {
        mean,
        median: sorted[sorted.len() / 2],
        std_dev: var.max(0.0).sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Frequency of each distinct score, ascending by score.
pub fn score_histogram(scores: &[u32]) -> Vec<(u32, usize)> {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();
    let mut out: Vec<(u32, usize)> = Vec::new();
    for s in sorted {
        match out.last_mut() {
            Some((v, c)) if *v == s => *c += 1,
            _ => out.push((s, 1)),
        }
    }
    out
}

/// Play one turn: roll a fresh hand, then before each reroll keep the
/// planner's best hold and reroll the rest. Stops early once the planner
/// keeps every die.
pub fn play_turn(
    planner: &Planner,
    chance: &mut ChanceMode,
    game: u64,
    dice: &DiceConfig,
    rerolls: u32,
) -> Result<TurnRecord, StrategyError> {
    let sides = dice.num_die_sides;
    validate_die_sides(sides)?;
    let opening = chance.roll(game, 0, dice.hand_size, sides);
    let mut hand = opening.clone();
    let mut decisions = Vec::new();

    for roll_idx in 1..=rerolls {
        let best = planner.best_hold(&hand, sides)?;
        let free = hand.len() - best.hold.len();
        if free == 0 {
            decisions.push(TurnDecision {
                hand: hand.clone(),
                hold: best.hold,
                expected_value: best.expected_value,
                rolled: Vec::new(),
            });
            break;
        }

        let rolled = chance.roll(game, roll_idx, free, sides);
        let mut next = best.hold.dice().to_vec();
        next.extend_from_slice(&rolled);
        decisions.push(TurnDecision {
            hand: std::mem::replace(&mut hand, next),
            hold: best.hold,
            expected_value: best.expected_value,
            rolled,
        });
    }

    Ok(TurnRecord {
        game,
        opening,
        decisions,
        score: score(&hand),
        final_hand: hand,
    })
}

/// Simulate `sim.games` turns; `on_turn` sees every finished turn (e.g. for logging).
pub fn simulate_with<F>(
    planner: &Planner,
    dice: &DiceConfig,
    sim: &SimConfig,
    mut on_turn: F,
) -> Result<SimulationReport, StrategyError>
where
    F: FnMut(&TurnRecord),
{
    let mut chance = ChanceMode::new(sim.chance, sim.seed);
    let mut scores = Vec::with_capacity(sim.games as usize);
    let mut ev_sum = 0f64;

    for game in 0..sim.games as u64 {
        let turn = play_turn(planner, &mut chance, game, dice, sim.rerolls)?;
        ev_sum += turn.opening_expected_value();
        scores.push(turn.score);
        on_turn(&turn);
    }

    let mean_opening_expected_value = if scores.is_empty() {
        0.0
    } else {
        ev_sum / scores.len() as f64
    };

    Ok(SimulationReport {
        summary: summarize_scores(&scores),
        scores,
        mean_opening_expected_value,
    })
}

pub fn simulate(
    planner: &Planner,
    dice: &DiceConfig,
    sim: &SimConfig,
) -> Result<SimulationReport, StrategyError> {
    simulate_with(planner, dice, sim, |_| {})
}
