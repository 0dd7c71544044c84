//! Expected upper-section score of a hold.

use crate::dice::{validate_die_sides, Face};
use crate::error::StrategyError;
use crate::outcomes::{die_faces, generate_outcomes};
use crate::scoring::score_split;

/// Expected score of keeping `held_dice` and rerolling `num_free_dice` fair
/// dice with `num_die_sides` sides.
///
/// Exact mean over all `num_die_sides^num_free_dice` equally likely outcomes.
/// With no free dice this is `score(held_dice)` exactly.
pub fn expected_value(
    held_dice: &[Face],
    num_die_sides: u8,
    num_free_dice: usize,
) -> Result<f64, StrategyError> {
    validate_die_sides(num_die_sides)?;

    let outcomes = generate_outcomes(&die_faces(num_die_sides), num_free_dice);
    let total: u64 = outcomes
        .iter()
        .map(|rolled| score_split(held_dice, rolled) as u64)
        .sum();
    Ok(total as f64 / outcomes.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;

    #[test]
    fn no_free_dice_equals_score() {
        let holds: [&[Face]; 4] = [&[1, 1, 1], &[2, 2, 2, 2, 2], &[6], &[]];
        for held in holds {
            assert_eq!(expected_value(held, 6, 0).unwrap(), score(held) as f64);
        }
    }

    #[test]
    fn single_fresh_die_is_mean_face() {
        assert_eq!(expected_value(&[], 6, 1).unwrap(), 3.5);
        assert_eq!(expected_value(&[], 4, 1).unwrap(), 2.5);
    }

    #[test]
    fn known_small_cases() {
        // Keep a 5, roll one d6: only another 5 beats the kept 5.
        assert_eq!(expected_value(&[5], 6, 1).unwrap(), 6.0);
        // Two fresh d6: 91/18.
        assert!((expected_value(&[], 6, 2).unwrap() - 91.0 / 18.0).abs() < 1e-12);
        // Keep (2, 2), roll one d6: 29/6.
        assert!((expected_value(&[2, 2], 6, 1).unwrap() - 29.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_sides() {
        assert_eq!(
            expected_value(&[1], 0, 1),
            Err(StrategyError::InvalidDieSides(0))
        );
    }
}
