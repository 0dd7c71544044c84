#[cfg(test)]
mod tests {
    use crate::{generate_holds, num_holds, Hold};

    #[test]
    fn distinct_hand_has_all_subsets() {
        let holds = generate_holds(&[1, 2, 3, 4, 5]);
        assert_eq!(holds.len(), 32);
        assert_eq!(num_holds(&[1, 2, 3, 4, 5]), 32);
    }

    #[test]
    fn repeated_faces_are_not_counted_by_position() {
        // (1,1,1,5,6): 4 choices for the ones x 2 x 2 = 16.
        let hand = [1, 1, 1, 5, 6];
        let holds = generate_holds(&hand);
        assert_eq!(holds.len(), 16);
        assert_eq!(num_holds(&hand), 16);

        let mut dedup = holds.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), holds.len(), "holds must be distinct");
    }

    #[test]
    fn contains_empty_and_full_hand() {
        let hand = [2, 2, 3, 4, 6];
        let holds = generate_holds(&hand);
        assert!(holds.contains(&Hold::empty()));
        assert!(holds.contains(&Hold::from_dice(&hand)));
    }

    #[test]
    fn every_hold_is_sub_multiset() {
        let hand = [6, 1, 6, 1, 6];
        for hold in generate_holds(&hand) {
            assert!(hold.is_sub_multiset_of(&hand), "{hold} not within {hand:?}");
        }
    }

    #[test]
    fn all_same_face_yields_one_hold_per_size() {
        let holds = generate_holds(&[4, 4, 4, 4, 4]);
        let lens: Vec<usize> = holds.iter().map(Hold::len).collect();
        assert_eq!(lens, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn output_is_sorted_canonical() {
        let holds = generate_holds(&[3, 1, 2]);
        let mut sorted = holds.clone();
        sorted.sort();
        assert_eq!(holds, sorted);
        for h in &holds {
            assert!(h.dice().windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(holds[0], Hold::empty());
    }

    #[test]
    fn empty_hand_only_holds_nothing() {
        assert_eq!(generate_holds(&[]), vec![Hold::empty()]);
    }
}
