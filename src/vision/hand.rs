//! Detected-hand data model
//!
//! Detectors report one boolean per digit, thumb to pinky. The kiosk never
//! trusts that shape: a hand with anything other than exactly five digit
//! states classifies as "no gesture" instead of panicking, per the
//! defensive handling the selection logic requires.

use smallvec::SmallVec;

/// Digit states for one detected hand, thumb to pinky
///
/// Stored inline; a well-formed hand never allocates.
pub type DigitStates = SmallVec<[bool; 5]>;

/// One detected hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    digits: DigitStates,
}

impl Hand {
    /// Wrap raw digit states as reported by a detector
    pub fn new(digits: impl Into<DigitStates>) -> Self {
        Self {
            digits: digits.into(),
        }
    }

    /// Convenience constructor: a hand with `n` fingers raised
    ///
    /// Raises the first `n` digits of a five-digit hand. Counts above 5
    /// saturate.
    pub fn with_fingers_up(n: usize) -> Self {
        let mut digits = DigitStates::new();
        for i in 0..5 {
            digits.push(i < n);
        }
        Self { digits }
    }

    /// Number of raised fingers, if the hand is well-formed
    ///
    /// Returns `None` when the detector reported anything other than
    /// exactly five digit states; malformed data degrades to "no gesture"
    /// rather than an index error.
    pub fn finger_count(&self) -> Option<u8> {
        if self.digits.len() != 5 {
            return None;
        }
        let raised = self.digits.iter().filter(|&&up| up).count();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "at most 5 raised digits fits in u8"
        )]
        let raised = raised as u8;
        Some(raised)
    }

    /// Raw digit states as reported
    pub fn digits(&self) -> &[bool] {
        &self.digits
    }
}
