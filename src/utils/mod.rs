//! Utility modules
//!
//! Provides logging initialization with startup rotation.

pub mod logging;

pub use logging::init_logging;
