#![no_main]

use fingervote::selection::{GestureRead, SelectionState};
use fingervote::vision::hand::{DigitStates, Hand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each input byte scripts one frame: low bits pick the digit pattern
    // length, high bit drops the hand entirely. Classification and the
    // state machine must survive any detector output without panicking.
    let mut state = SelectionState::default();

    for &byte in data {
        let gesture = if byte & 0x80 != 0 {
            GestureRead::NoHand
        } else {
            let len = usize::from(byte & 0x0f);
            let digits = DigitStates::from_iter((0..len).map(|i| (byte >> (i % 8)) & 1 == 1));
            GestureRead::from_hands(&[Hand::new(digits)])
        };
        let _ = state.advance(gesture);
    }
});
