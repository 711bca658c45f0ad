//! Frame compositing module
//!
//! Builds the kiosk's output frame each iteration: the mirrored camera
//! feed, the current mode panel, the progress ring while a selection is
//! held, and a thumbnail icon for every confirmed answer, all blitted onto
//! a working copy of the background artwork.
//!
//! The layout is fixed at 1280x720 with coordinates inherited from the
//! kiosk artwork; see [`layout`] for the named regions.

pub mod compositor;
pub mod layout;

pub use compositor::Compositor;
