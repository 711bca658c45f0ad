//! Keyboard-driven development detector
//!
//! Hand landmark inference is an external collaborator; this backend lets
//! the kiosk be exercised without one. Holding a digit key (1-3) stands in
//! for holding up that many fingers: the detector synthesizes a single
//! well-formed hand with the corresponding digits raised. Releasing the
//! key reports no hands, exactly like a hand leaving the camera's view.
//!
//! The binary feeds the held digit in from the window's key state each
//! frame before detection runs.

use crate::error::Result;
use crate::vision::{Hand, HandDetector};
use image::RgbImage;

/// Development detector backend driven by held digit keys
#[derive(Debug, Default)]
pub struct KeyboardDetector {
    held: Option<u8>,
}

impl KeyboardDetector {
    /// Create a detector with no key held
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the digit currently held on the keyboard, if any
    pub fn set_held(&mut self, digit: Option<u8>) {
        self.held = digit;
    }
}

impl HandDetector for KeyboardDetector {
    fn detect(&mut self, _frame: &RgbImage) -> Result<Vec<Hand>> {
        Ok(match self.held {
            Some(digit) => vec![Hand::with_fingers_up(digit as usize)],
            None => Vec::new(),
        })
    }
}
