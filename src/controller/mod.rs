//! Kiosk orchestration module
//!
//! This module coordinates the selection state machine, the compositor,
//! and the result sink, implementing the core per-frame logic.
//!
//! # Overview
//!
//! The controller is the central coordinator that:
//! - **Reduces detector output** to the gesture the state machine consumes
//! - **Advances the survey** one frame at a time
//! - **Triggers the export** exactly once, when the survey completes
//! - **Produces the composited frame** for presentation
//!
//! # Frame Flow
//!
//! ```text
//! FrameSource → mirror → HandDetector → KioskController::step
//!                                             ↓
//!                                   SelectionState::advance
//!                                             ↓
//!                                  Compositor → display buffer
//!                                             ↓ (on completion)
//!                                        ResultSink
//! ```
//!
//! The controller never touches the camera, the window, or the detector
//! directly; the binary feeds it an optional frame plus the detected
//! hands, which keeps every survey scenario drivable from tests.

pub mod kiosk;

pub use kiosk::KioskController;
