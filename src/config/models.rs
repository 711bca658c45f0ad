//! Configuration data models
//!
//! This module defines the data structures used for kiosk configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Camera capture settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSettings {
    /// Device index passed to the capture backend (0 = default webcam)
    pub device_index: u32,
    /// Requested frame width in pixels
    pub width: u32,
    /// Requested frame height in pixels
    pub height: u32,
}

/// Selection state machine tuning
///
/// `speed_deg_per_frame` is the per-frame sweep of the progress ring in
/// degrees; a selection confirms once the accumulated sweep exceeds a full
/// circle. `pause_frames` is the post-confirmation window during which new
/// gestures are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionTuning {
    /// Progress ring sweep per qualifying frame, in degrees (1-120)
    pub speed_deg_per_frame: u32,
    /// Number of frames gestures stay blocked after a confirmation
    pub pause_frames: u32,
}

/// Survey report export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory reports are written into (created on demand)
    pub output_dir: PathBuf,
}

/// Top-level kiosk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Path to the asset manifest JSON file
    pub manifest_path: PathBuf,
    /// Camera capture settings
    pub capture: CaptureSettings,
    /// Selection state machine tuning
    pub selection: SelectionTuning,
    /// Survey report export settings
    pub export: ExportSettings,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            width: 640,
            height: 480,
        }
    }
}

impl Default for SelectionTuning {
    fn default() -> Self {
        Self {
            speed_deg_per_frame: 7,
            pause_frames: 60,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
        }
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("resources/manifest.json"),
            capture: CaptureSettings::default(),
            selection: SelectionTuning::default(),
            export: ExportSettings::default(),
        }
    }
}

impl SelectionTuning {
    /// Clamp tuning values into their supported ranges
    ///
    /// A sweep of 0 degrees would never confirm and one above 120 confirms
    /// in under three frames, which defeats the hold gesture; both are
    /// treated as operator typos rather than errors.
    pub fn sanitized(&self) -> Self {
        Self {
            speed_deg_per_frame: self.speed_deg_per_frame.clamp(1, 120),
            pause_frames: self.pause_frames.min(600),
        }
    }
}
