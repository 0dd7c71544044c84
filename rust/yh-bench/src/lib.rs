//! Shared inputs for the yh-core benchmarks.

use yh_core::Face;

/// Deterministic sample hands (xorshift64, no rand dependency).
pub fn gen_hands(n: usize, hand_size: usize, num_die_sides: u8) -> Vec<Vec<Face>> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            d.push((x % num_die_sides as u64) as Face + 1);
        }
        out.push(d);
    }
    out
}
