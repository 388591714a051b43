use std::fmt;

use rand::Rng;

use crate::{constants::gameplay::DIGIT_RANGE, marker::Marker};

/// The digits the player has to remember, in the order they were added, each paired with its [`Marker`].
///
/// Only ever grows. `digits[i]` and `markers[i]` always describe the same position.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Sequence {
    digits: Vec<u8>,
    markers: Vec<Marker>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence out of known digits, as if each had been appended in order.
    pub fn from_digits(digits: &[u8]) -> Self {
        Self {
            digits: digits.to_vec(),
            markers: vec![Marker::set_new(); digits.len()],
        }
    }

    /// Add one uniformly random digit to the end, with a freshly set marker. Returns the new digit.
    pub fn append_random_digit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let digit = rng.gen_range(0..DIGIT_RANGE);
        self.digits.push(digit);
        self.markers.push(Marker::set_new());
        digit
    }

    /// Reset every marker, whatever state it was in.
    pub fn reset_all_markers(&mut self) {
        for marker in &mut self.markers {
            marker.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether `candidate` is exactly this sequence: same length, same value at every position.
    pub fn matches(&self, candidate: &[i64]) -> bool {
        candidate.len() == self.digits.len()
            && self.digits.iter().zip(candidate).all(|(&d, &c)| i64::from(d) == c)
    }
}

/// Renders as it's shown to the player: every digit followed by a single space.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{} ", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::marker::MarkerState;

    #[test]
    fn new_sequence_is_empty() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.markers().is_empty());
    }

    #[test]
    fn append_grows_by_one_with_set_marker() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seq = Sequence::new();
        for expected_len in 1..=20 {
            seq.append_random_digit(&mut rng);
            assert_eq!(seq.len(), expected_len);
            assert_eq!(seq.markers().len(), expected_len);
            assert_eq!(seq.markers().last().map(Marker::state), Some(MarkerState::Set));
        }
    }

    #[test]
    fn appended_digits_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let mut seq = Sequence::new();
        for _ in 0..500 {
            let d = seq.append_random_digit(&mut rng);
            assert!(d < 10, "digit {} out of range", d);
        }
        // with 500 draws every digit should have come up at least once
        for d in 0..10 {
            assert!(seq.digits().contains(&d), "never drew {}", d);
        }
    }

    #[test]
    fn append_returns_what_was_stored() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut seq = Sequence::from_digits(&[4, 4]);
        let d = seq.append_random_digit(&mut rng);
        assert_eq!(seq.digits(), &[4, 4, d]);
    }

    #[test]
    fn reset_all_clears_every_marker() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seq = Sequence::from_digits(&[1, 2, 3]);
        seq.reset_all_markers();
        seq.append_random_digit(&mut rng);
        // one reset, one set; reset has to handle both
        seq.reset_all_markers();
        assert!(seq.markers().iter().all(Marker::is_reset));
        seq.reset_all_markers();
        assert!(seq.markers().iter().all(Marker::is_reset));
    }

    #[test]
    fn reset_all_keeps_digits() {
        let mut seq = Sequence::from_digits(&[3, 7]);
        seq.reset_all_markers();
        assert_eq!(seq.digits(), &[3, 7]);
    }

    #[test]
    fn matches_identical() {
        let seq = Sequence::from_digits(&[3, 7]);
        assert!(seq.matches(&[3, 7]));
    }

    #[test]
    fn wont_match_different_value() {
        let seq = Sequence::from_digits(&[3, 7]);
        assert!(!seq.matches(&[3, 8]));
        assert!(!seq.matches(&[7, 3]));
    }

    #[test]
    fn wont_match_different_length() {
        let seq = Sequence::from_digits(&[3, 7]);
        assert!(!seq.matches(&[3]));
        assert!(!seq.matches(&[]));
        assert!(!seq.matches(&[3, 7, 0]));
    }

    #[test]
    fn wont_match_out_of_range_numbers() {
        let seq = Sequence::from_digits(&[0, 9]);
        assert!(!seq.matches(&[256, 9]));
        assert!(!seq.matches(&[0, -247]));
    }

    #[test]
    fn empty_matches_only_empty() {
        let seq = Sequence::new();
        assert!(seq.matches(&[]));
        assert!(!seq.matches(&[0]));
    }

    #[test]
    fn displays_with_trailing_spaces() {
        assert_eq!(Sequence::from_digits(&[3, 7, 0]).to_string(), "3 7 0 ");
        assert_eq!(Sequence::new().to_string(), "");
    }
}
