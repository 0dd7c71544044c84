//! Dice sources for turn simulation.
//!
//! Deterministic mode derives dice from a structural event key instead of an
//! evolving RNG state: the same (seed, game, roll) always yields the same dice,
//! independent of how many dice earlier rolls consumed.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::config::ChanceKind;
use crate::dice::Face;

/// Structural event key for deterministic dice generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKey {
    pub seed: u64,
    pub game: u64,
    /// 0 = opening roll, 1.. = rerolls.
    pub roll_idx: u32,
}

/// SplitMix64 step (fast, deterministic).
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn mix_seed(key: EventKey) -> u64 {
    // Fixed mixing; std Hash/RandomState is not stable across runs.
    let mut x = key.seed;
    x ^= key.game.wrapping_mul(0xD6E8FEB86659FD93);
    x ^= (key.roll_idx as u64).wrapping_mul(0xA5A35625E4F7C1AD);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Deterministically roll `n` dice with `num_die_sides` sides for `key`.
pub fn roll_keyed(key: EventKey, n: usize, num_die_sides: u8) -> Vec<Face> {
    let mut state = mix_seed(key);
    (0..n)
        .map(|_| {
            let r = splitmix64_next(&mut state);
            ((r % num_die_sides as u64) + 1) as Face
        })
        .collect()
}

/// How dice are generated during simulation.
pub enum ChanceMode {
    /// Event-keyed stream; requires only a base seed.
    DeterministicEventKeyed { seed: u64 },
    /// Pseudorandom dice from a seeded ChaCha8 PRNG.
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn new(kind: ChanceKind, seed: u64) -> Self {
        match kind {
            ChanceKind::Deterministic => ChanceMode::DeterministicEventKeyed { seed },
            ChanceKind::Rng => ChanceMode::Rng {
                rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
            },
        }
    }

    /// Roll `n` dice for event (`game`, `roll_idx`).
    pub fn roll(&mut self, game: u64, roll_idx: u32, n: usize, num_die_sides: u8) -> Vec<Face> {
        match self {
            ChanceMode::DeterministicEventKeyed { seed } => roll_keyed(
                EventKey {
                    seed: *seed,
                    game,
                    roll_idx,
                },
                n,
                num_die_sides,
            ),
            ChanceMode::Rng { rng } => (0..n).map(|_| rng.gen_range(1..=num_die_sides)).collect(),
        }
    }
}
