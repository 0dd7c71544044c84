//! Property-based tests for enumeration, scoring and strategy.

use proptest::prelude::*;

use yh_core::{
    die_faces, expected_value, generate_holds, generate_outcomes, num_holds, score, strategy,
    Face, Hold,
};

/// Strategy: a hand of 1..=5 dice with faces in 1..=sides, plus the side count.
fn hand_strategy() -> impl Strategy<Value = (Vec<Face>, u8)> {
    (1u8..=6).prop_flat_map(|sides| (prop::collection::vec(1..=sides, 1..=5), Just(sides)))
}

proptest! {
    // 1. Every hold is a sub-multiset of the hand
    #[test]
    fn holds_are_sub_multisets((hand, _sides) in hand_strategy()) {
        for hold in generate_holds(&hand) {
            prop_assert!(hold.is_sub_multiset_of(&hand), "hold={hold} hand={hand:?}");
        }
    }

    // 2. Empty hold and full hand always present, no duplicates
    #[test]
    fn holds_contain_extremes_without_duplicates((hand, _sides) in hand_strategy()) {
        let holds = generate_holds(&hand);
        prop_assert!(holds.contains(&Hold::empty()));
        prop_assert!(holds.contains(&Hold::from_dice(&hand)));
        prop_assert!(holds.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(holds.len(), num_holds(&hand));
    }

    // 3. |outcomes| == |domain|^n
    #[test]
    fn outcome_count_is_exact(sides in 1u8..=6, n in 0usize..=4) {
        let out = generate_outcomes(&die_faces(sides), n);
        prop_assert_eq!(out.len(), (sides as usize).pow(n as u32));
        prop_assert!(out.iter().all(|o| o.len() == n));
    }

    // 4. score(hand) >= max(hand)
    #[test]
    fn score_at_least_max_face((hand, _sides) in hand_strategy()) {
        let max = *hand.iter().max().unwrap() as u32;
        prop_assert!(score(&hand) >= max);
    }

    // 5. Scoring ignores order
    #[test]
    fn score_is_order_independent((hand, _sides) in hand_strategy()) {
        let mut rev = hand.clone();
        rev.reverse();
        prop_assert_eq!(score(&hand), score(&rev));
    }

    // 6. No free dice -> expected value is the score, exactly
    #[test]
    fn zero_free_dice_is_exact_score((hand, sides) in hand_strategy()) {
        prop_assert_eq!(expected_value(&hand, sides, 0).unwrap(), score(&hand) as f64);
    }

    // 7. Strategy is never worse than keeping everything, and is repeatable
    #[test]
    fn strategy_dominates_keeping_all((hand, sides) in hand_strategy()) {
        let r = strategy(&hand, sides).unwrap();
        prop_assert!(r.expected_value >= score(&hand) as f64);
        prop_assert!(r.hold.is_sub_multiset_of(&hand));
        let again = strategy(&hand, sides).unwrap();
        prop_assert_eq!(r, again);
    }
}
