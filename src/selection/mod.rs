//! Selection state machine
//!
//! The per-frame survey logic: classify the detected hand's raised-finger
//! count into a candidate answer, animate a hold counter while the
//! candidate persists, confirm the answer once the progress ring completes
//! a full revolution, and block new gestures for a pause window after each
//! confirmation.
//!
//! The state machine is a plain struct advanced by a pure transition
//! function, so every scenario is unit-testable without a camera, a
//! detector, or a display.

pub mod state;

pub use state::{Choice, Confirmation, GestureRead, SelectionState, FULL_SWEEP_DEG};
