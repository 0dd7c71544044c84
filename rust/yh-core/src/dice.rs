//! Dice primitives: faces, canonical holds, validation and parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

/// A single die value in `1..=num_die_sides`.
pub type Face = u8;

/// Number of distinct `Face` values; sizes per-face count tables.
pub(crate) const FACE_SLOTS: usize = Face::MAX as usize + 1;

/// A multiset of dice kept between rolls, stored in canonical (ascending) order.
///
/// Two holds with the same contents compare equal no matter which positional
/// dice of the hand they were taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hold(Vec<Face>);

impl Hold {
    /// The empty hold (reroll everything).
    pub fn empty() -> Self {
        Hold(Vec::new())
    }

    /// Build a hold from dice in any order.
    pub fn from_dice(dice: &[Face]) -> Self {
        let mut v = dice.to_vec();
        v.sort_unstable();
        Hold(v)
    }

    /// Return a new hold with `face` added, keeping canonical order.
    pub fn with(&self, face: Face) -> Self {
        let mut v = Vec::with_capacity(self.0.len() + 1);
        let at = self.0.partition_point(|&d| d <= face);
        v.extend_from_slice(&self.0[..at]);
        v.push(face);
        v.extend_from_slice(&self.0[at..]);
        Hold(v)
    }

    pub fn dice(&self) -> &[Face] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of copies of `face` in this hold.
    pub fn count(&self, face: Face) -> usize {
        self.0.iter().filter(|&&d| d == face).count()
    }

    /// True if no face occurs here more often than in `hand`.
    pub fn is_sub_multiset_of(&self, hand: &[Face]) -> bool {
        let have = count_faces(hand);
        let need = count_faces(&self.0);
        need.iter().zip(have.iter()).all(|(n, h)| n <= h)
    }
}

impl From<Vec<Face>> for Hold {
    fn from(mut v: Vec<Face>) -> Self {
        v.sort_unstable();
        Hold(v)
    }
}

impl fmt::Display for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, ")")
    }
}

/// Count occurrences of each face. `counts[f]` = copies of face `f`; slot 0 is unused.
pub fn count_faces(dice: &[Face]) -> [usize; FACE_SLOTS] {
    let mut counts = [0usize; FACE_SLOTS];
    for &d in dice {
        counts[d as usize] += 1;
    }
    counts
}

pub fn validate_die_sides(num_die_sides: u8) -> Result<(), StrategyError> {
    if num_die_sides < 1 {
        return Err(StrategyError::InvalidDieSides(num_die_sides));
    }
    Ok(())
}

/// Check that every face lies in `1..=num_die_sides`.
pub fn validate_faces(dice: &[Face], num_die_sides: u8) -> Result<(), StrategyError> {
    validate_die_sides(num_die_sides)?;
    match dice.iter().find(|&&d| d < 1 || d > num_die_sides) {
        Some(&face) => Err(StrategyError::FaceOutOfRange {
            face,
            num_die_sides,
        }),
        None => Ok(()),
    }
}

/// Validate a full hand: non-empty, positive side count, faces in range.
pub fn validate_hand(hand: &[Face], num_die_sides: u8) -> Result<(), StrategyError> {
    validate_die_sides(num_die_sides)?;
    if hand.is_empty() {
        return Err(StrategyError::EmptyHand);
    }
    validate_faces(hand, num_die_sides)
}

/// Parse a comma-separated dice list such as `"1,1,1,5,6"` or `"(2, 3)"`.
///
/// An empty list (`""` or `"()"`) parses to no dice; range checks are left to
/// [`validate_hand`] / [`validate_faces`].
pub fn parse_dice(input: &str) -> Result<Vec<Face>, StrategyError> {
    let trimmed = input
        .trim()
        .trim_start_matches(&['(', '['][..])
        .trim_end_matches(&[')', ']'][..])
        .trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<Face>().map_err(|e| StrategyError::ParseDice {
                input: input.to_string(),
                reason: format!("{tok:?}: {e}"),
            })
        })
        .collect()
}
