//! Static asset pipeline
//!
//! The kiosk's artwork is described by an explicit JSON manifest instead of
//! directory enumeration, so the mapping from question/option to image is
//! stable across platforms and filesystems. Every image is decoded and
//! dimension-checked before the frame loop starts; a missing or mis-sized
//! asset aborts startup.

pub mod library;
pub mod manifest;

pub use library::AssetLibrary;
pub use manifest::AssetManifest;
