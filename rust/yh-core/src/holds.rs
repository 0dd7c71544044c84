//! Hold enumeration: every distinct sub-multiset of a hand.

use rustc_hash::FxHashSet;

use crate::dice::{count_faces, Face, Hold};

/// Generate all distinct holds for `hand`, including the empty hold and the
/// full hand.
///
/// Holds are grown one die at a time: each hold of size k is extended by every
/// distinct face of the hand, unless that would keep more copies of the face
/// than the hand has. Canonical ordering plus set membership collapses holds
/// that differ only by which positional die was chosen.
///
/// Returned in ascending canonical order, without duplicates.
pub fn generate_holds(hand: &[Face]) -> Vec<Hold> {
    let available = count_faces(hand);
    let mut faces = hand.to_vec();
    faces.sort_unstable();
    faces.dedup();

    let mut all: FxHashSet<Hold> = FxHashSet::default();
    all.insert(Hold::empty());
    let mut frontier = vec![Hold::empty()];

    for _ in 0..hand.len() {
        let mut next: FxHashSet<Hold> = FxHashSet::default();
        for hold in &frontier {
            for &face in &faces {
                if hold.count(face) < available[face as usize] {
                    next.insert(hold.with(face));
                }
            }
        }
        if next.is_empty() {
            break;
        }
        all.extend(next.iter().cloned());
        frontier = next.into_iter().collect();
    }

    let mut out: Vec<Hold> = all.into_iter().collect();
    out.sort_unstable();
    out
}

/// Number of distinct holds for `hand`: the product of `(count(v) + 1)` over faces.
pub fn num_holds(hand: &[Face]) -> usize {
    count_faces(hand).iter().map(|&c| c + 1).product()
}
