//! Configuration management module
//!
//! This module handles loading, saving, and managing kiosk configuration.
//! Configuration is stored in `$FINGERVOTE_HOME/config.json` with atomic
//! writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{CaptureSettings, ExportSettings, KioskConfig, SelectionTuning};
