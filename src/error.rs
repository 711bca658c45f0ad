//! Error types for the `fingervote` kiosk
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Errors raised while loading and validating the static asset set
///
/// Assets are fatal at startup: the kiosk refuses to enter the frame loop
/// with an incomplete or mis-sized image set.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Manifest file could not be read
    #[error("failed to read asset manifest {path}")]
    ManifestRead {
        /// Path of the manifest that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON or has the wrong shape
    #[error("failed to parse asset manifest {path}")]
    ManifestParse {
        /// Path of the manifest that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Manifest lists the wrong number of images for a slot
    #[error("manifest lists {found} {kind} images, expected {expected}")]
    WrongCount {
        /// Which image list is malformed ("mode" or "icon")
        kind: &'static str,
        /// Number of entries found in the manifest
        found: usize,
        /// Number of entries required by the layout
        expected: usize,
    },

    /// An image named by the manifest could not be opened or decoded
    #[error("failed to load image {path}")]
    ImageLoad {
        /// Path of the image that failed to load
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: image::ImageError,
    },

    /// A decoded image does not match the dimensions the layout requires
    #[error("image {path} is {found_w}x{found_h}, expected {expected_w}x{expected_h}")]
    WrongDimensions {
        /// Path of the offending image
        path: PathBuf,
        /// Decoded width
        found_w: u32,
        /// Decoded height
        found_h: u32,
        /// Required width
        expected_w: u32,
        /// Required height
        expected_h: u32,
    },
}

/// Main error type for the `fingervote` kiosk
#[derive(Debug, Error)]
pub enum KioskError {
    /// Static asset validation or loading failed
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// The capture device could not be opened or configured
    /// Preserves the underlying error source for full error chain transparency
    #[error("failed to open capture device: {0}")]
    CaptureOpenFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Hand detection backend failure
    /// Preserves the underlying error source for full error chain transparency
    #[error("hand detection error: {0}")]
    DetectionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The display window could not be created or updated
    /// Preserves the underlying error source for full error chain transparency
    #[error("display error: {0}")]
    DisplayFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Writing the survey report failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("failed to export survey report: {0}")]
    ExportFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `fingervote` operations
pub type Result<T> = std::result::Result<T, KioskError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `KioskError` and returns a message suitable for
/// displaying to an operator setting up the kiosk. The messages include
/// troubleshooting hints for the common misconfigurations.
pub fn get_user_friendly_error(error: &KioskError) -> String {
    match error {
        KioskError::Asset(e) => {
            format!(
                "The survey artwork could not be loaded:\n\n{e}\n\n\
                 Please check that the asset manifest lists one background,\n\
                 four mode panels, and nine answer icons, and that every\n\
                 file exists with the dimensions the layout expects."
            )
        }
        KioskError::CaptureOpenFailed(_) => "Unable to open the webcam.\n\n\
             Please ensure:\n\
             - A camera is connected and not in use by another program\n\
             - The configured device index matches an attached camera\n\
             - The camera can deliver 640x480 video"
            .to_string(),
        KioskError::DetectionFailed(_) => "The hand detection backend failed.\n\n\
             The kiosk cannot classify gestures.\n\
             Try restarting the kiosk."
            .to_string(),
        KioskError::DisplayFailed(_) => "Unable to create or update the kiosk window.\n\n\
             Please ensure a display is connected and the session\n\
             has access to it."
            .to_string(),
        KioskError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the kiosk home\n\
             directory (FINGERVOTE_HOME)."
            .to_string(),
        KioskError::ExportFailed(_) => "Failed to write the survey report.\n\n\
             The answers for this session were not saved.\n\
             Check that the export directory exists and is writable."
            .to_string(),
        KioskError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        KioskError::JsonError(e) => {
            format!(
                "A JSON file is corrupted:\n\n{e}\n\n\
                 The application will use default settings where possible."
            )
        }
    }
}
