//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! `$FINGERVOTE_HOME/kiosk.log` and automatic rotation on application
//! startup, keeping a bounded history of previous sessions.

use crate::config::ConfigManager;
use crate::error::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

/// Maximum number of historical log files to keep (kiosk.log.1 through kiosk.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Rotates existing logs on startup so each kiosk
/// session gets a fresh file with the previous sessions preserved.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::kiosk_home();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("kiosk.log");
    rotate_logs_on_startup(&log_path)?;

    // tracing_appender's rotation is time-based; session-based retention
    // is handled by rotate_logs_on_startup, so the appender never rotates
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("kiosk")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| crate::error::KioskError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| crate::error::KioskError::ConfigError(Box::new(e)))?;

    tracing::info!("fingervote v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// `kiosk.log.9` is deleted, every numbered file shifts up by one, and the
/// current `kiosk.log` becomes `kiosk.log.1`; the logger then creates a
/// fresh `kiosk.log` for this session.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        crate::error::KioskError::ConfigError(crate::error::StringError::new("Invalid log path"))
    })?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| {
            crate::error::KioskError::ConfigError(crate::error::StringError::new(
                "Invalid log filename",
            ))
        })?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    Ok(())
}
