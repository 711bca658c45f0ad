//! `fingervote` - Gesture-driven survey kiosk binary
//!
//! Wires the capture device, the detection backend, and the display window
//! to the library's frame controller, then pumps the loop until 'q' or the
//! window closes.

use anyhow::{Context, Result};
use fingervote::{
    assets::{AssetLibrary, AssetManifest},
    config::{ConfigManager, KioskConfig},
    controller::KioskController,
    error::get_user_friendly_error,
    export::JsonFileSink,
    render::compositor::{mirror_horizontal, pack_0rgb},
    render::layout::{SCREEN_H, SCREEN_W},
    utils,
    vision::{FrameSource, HandDetector, KeyboardDetector, NokhwaSource},
    KioskError,
};
use minifb::{Key, Window, WindowOptions};
use tracing::{error, info};

/// Main entry point for the kiosk
///
/// Performs initialization in phases (logging, configuration, assets,
/// capture, display), reports failures in operator-friendly terms, and
/// then runs the frame loop until quit.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("fingervote v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load kiosk configuration")?;
    info!(
        "Configuration loaded, manifest at {}",
        config.manifest_path.display()
    );

    // Assets are fatal before the loop: a kiosk with broken artwork must
    // refuse to start rather than render garbage
    let controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to load survey assets: {e}");
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e.into());
        }
    };
    info!("Survey assets validated and loaded");

    let source = match NokhwaSource::open(&config.capture) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to open capture device: {e}");
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e.into());
        }
    };

    let window = match create_window() {
        Ok(window) => window,
        Err(e) => {
            error!("Failed to create kiosk window: {e}");
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e.into());
        }
    };

    // Development detection backend: digits held on the keyboard stand in
    // for fingers held up until a landmark model is plugged into the
    // HandDetector seam
    let detector = KeyboardDetector::new();

    info!("Entering frame loop");
    run_loop(controller, source, detector, window)?;

    info!("fingervote shut down cleanly");
    Ok(())
}

/// Load and validate everything the controller needs
fn build_controller(config: &KioskConfig) -> fingervote::Result<KioskController> {
    let manifest = AssetManifest::load(&config.manifest_path)?;
    let assets = AssetLibrary::load(&manifest)?;
    let sink = JsonFileSink::new(config.export.output_dir.clone());
    Ok(KioskController::new(
        assets,
        &config.selection,
        Box::new(sink),
    ))
}

/// Create the kiosk window at the layout resolution
fn create_window() -> fingervote::Result<Window> {
    let mut window = Window::new(
        "fingervote",
        SCREEN_W as usize,
        SCREEN_H as usize,
        WindowOptions::default(),
    )
    .map_err(|e| KioskError::DisplayFailed(Box::new(e)))?;
    window.set_target_fps(60);
    Ok(window)
}

/// One capture + detect + step + present cycle per iteration, until quit
fn run_loop(
    mut controller: KioskController,
    mut source: NokhwaSource,
    mut detector: KeyboardDetector,
    mut window: Window,
) -> Result<()> {
    while window.is_open() && !window.is_key_down(Key::Q) {
        detector.set_held(held_digit(&window));

        let frame = match source.read_frame()? {
            Some(mut frame) => {
                mirror_horizontal(&mut frame);
                Some(frame)
            }
            // No frame this tick: the controller skips the frame and the
            // previous camera pixels stay on screen
            None => None,
        };

        let hands = match &frame {
            Some(frame) => detector.detect(frame)?,
            None => Vec::new(),
        };

        let composited = controller.step(frame.as_ref(), &hands);
        let buffer = pack_0rgb(composited);

        window
            .update_with_buffer(&buffer, SCREEN_W as usize, SCREEN_H as usize)
            .map_err(|e| KioskError::DisplayFailed(Box::new(e)))?;
    }

    info!("Quit requested");
    Ok(())
}

/// Digit key currently held, lowest first
fn held_digit(window: &Window) -> Option<u8> {
    const DIGITS: [(Key, u8); 3] = [(Key::Key1, 1), (Key::Key2, 2), (Key::Key3, 3)];
    DIGITS
        .iter()
        .find(|(key, _)| window.is_key_down(*key))
        .map(|(_, digit)| *digit)
}
