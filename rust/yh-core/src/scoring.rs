//! Upper-section scoring.

use crate::dice::{Face, FACE_SLOTS};

/// Best upper-section score for a full hand: `max_v v * count(v, hand)`.
///
/// An empty hand scores 0.
pub fn score(hand: &[Face]) -> u32 {
    score_split(hand, &[])
}

/// Score `held` followed by `rolled` without building the concatenated hand.
pub fn score_split(held: &[Face], rolled: &[Face]) -> u32 {
    let mut totals = [0u32; FACE_SLOTS];
    let mut best = 0u32;
    for &d in held.iter().chain(rolled) {
        let t = &mut totals[d as usize];
        *t += d as u32;
        best = best.max(*t);
    }
    best
}
