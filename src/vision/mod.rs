//! Capture and detection seams
//!
//! The kiosk treats frame acquisition and hand landmark detection as
//! external collaborators behind two traits:
//!
//! - [`FrameSource`]: yields RGB frames, or `None` when no frame is
//!   available this tick (non-fatal, the loop skips the frame)
//! - [`HandDetector`]: maps a frame to zero or more detected [`Hand`]s
//!
//! Two adapters ship with the crate: [`NokhwaSource`] for webcam capture
//! and [`KeyboardDetector`], a development backend that synthesizes hands
//! from held digit keys so the kiosk can be exercised without a landmark
//! model. A model-based detector plugs into the same seam.

pub mod camera;
pub mod hand;
pub mod keyboard;

pub use camera::NokhwaSource;
pub use hand::Hand;
pub use keyboard::KeyboardDetector;

use crate::error::Result;
use image::RgbImage;

/// Source of camera frames at a fixed resolution
pub trait FrameSource {
    /// Read the next frame
    ///
    /// Returns `Ok(None)` when no frame is available this tick; the caller
    /// skips processing for the frame and keeps looping.
    fn read_frame(&mut self) -> Result<Option<RgbImage>>;
}

/// External hand landmark detection collaborator
pub trait HandDetector {
    /// Detect hands in a frame
    ///
    /// The kiosk only consumes the first returned hand; detectors are free
    /// to report more.
    fn detect(&mut self, frame: &RgbImage) -> Result<Vec<Hand>>;
}
