//! Reroll outcome enumeration.

use crate::dice::Face;

/// All ordered sequences of `length` values drawn from `domain` (with repetition).
///
/// Built breadth-first, one position per pass, so deep rerolls never recurse.
/// `length == 0` yields the single empty outcome. Duplicate domain values are
/// collapsed first, so the result always has exactly `|distinct domain|^length`
/// entries.
///
/// The size is exponential in `length`; callers are expected to bound it.
pub fn generate_outcomes(domain: &[Face], length: usize) -> Vec<Vec<Face>> {
    let mut values = domain.to_vec();
    values.sort_unstable();
    values.dedup();

    let mut current: Vec<Vec<Face>> = vec![Vec::new()];
    for _ in 0..length {
        let mut next = Vec::with_capacity(current.len() * values.len());
        for partial in &current {
            for &v in &values {
                let mut seq = Vec::with_capacity(partial.len() + 1);
                seq.extend_from_slice(partial);
                seq.push(v);
                next.push(seq);
            }
        }
        current = next;
    }
    current
}

/// The reroll domain `1..=num_die_sides`.
pub fn die_faces(num_die_sides: u8) -> Vec<Face> {
    (1..=num_die_sides).collect()
}
