//! Integration tests for `fingervote`
//!
//! Drives the full survey lifecycle through `KioskController` with
//! scripted capture and detection collaborators: asset loading, the three
//! hold-to-confirm answers, pause windows, and the exported report file.

use fingervote::{
    assets::{AssetLibrary, AssetManifest},
    config::{ConfigManager, KioskConfig, SelectionTuning},
    controller::KioskController,
    export::JsonFileSink,
    render::layout::{
        CAMERA_REGION, ICON_SIZE, MODE_PANEL_REGION, SCREEN_H, SCREEN_W,
    },
    vision::{FrameSource, Hand, HandDetector},
};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Frames of constant hold needed to confirm at the default speed
const HOLD_FRAMES: usize = 52;
/// Length of the post-confirmation pause window
const PAUSE_FRAMES: usize = 60;

fn write_png(dir: &Path, name: &str, w: u32, h: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(w, h, Rgb(color)).save(&path).unwrap();
    path
}

/// Write a complete asset set plus manifest JSON into `dir`
fn write_resources(dir: &Path) -> PathBuf {
    let manifest = AssetManifest {
        background: write_png(dir, "background.png", SCREEN_W, SCREEN_H, [5, 5, 5]),
        modes: (0..4u8)
            .map(|i| {
                write_png(
                    dir,
                    &format!("mode-{i}.png"),
                    MODE_PANEL_REGION.w,
                    MODE_PANEL_REGION.h,
                    [40 + i, 0, 0],
                )
            })
            .collect(),
        icons: (0..9u8)
            .map(|i| write_png(dir, &format!("icon-{i}.png"), ICON_SIZE, ICON_SIZE, [0, i, 0]))
            .collect(),
    };

    let path = dir.join("manifest.json");
    std::fs::write(&path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
    path
}

/// Scripted capture source: yields a fixed frame, or `None` on scripted misses
struct ScriptedSource {
    frame: RgbImage,
    miss_every: Option<usize>,
    tick: usize,
}

impl ScriptedSource {
    fn steady() -> Self {
        Self {
            frame: RgbImage::from_pixel(CAMERA_REGION.w, CAMERA_REGION.h, Rgb([90, 90, 90])),
            miss_every: None,
            tick: 0,
        }
    }

    fn flaky(miss_every: usize) -> Self {
        Self {
            miss_every: Some(miss_every),
            ..Self::steady()
        }
    }
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> fingervote::Result<Option<RgbImage>> {
        self.tick += 1;
        if let Some(n) = self.miss_every {
            if self.tick % n == 0 {
                return Ok(None);
            }
        }
        Ok(Some(self.frame.clone()))
    }
}

/// Scripted detector: replays a queue of per-frame hand lists
struct ScriptedDetector {
    script: std::vec::IntoIter<Vec<Hand>>,
}

impl ScriptedDetector {
    fn new(script: Vec<Vec<Hand>>) -> Self {
        Self {
            script: script.into_iter(),
        }
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &RgbImage) -> fingervote::Result<Vec<Hand>> {
        Ok(self.script.next().unwrap_or_default())
    }
}

/// Build a controller exporting into `export_dir`
fn build_controller(resource_dir: &Path, export_dir: &Path) -> KioskController {
    let manifest = AssetManifest::load(&write_resources(resource_dir)).unwrap();
    let assets = AssetLibrary::load(&manifest).unwrap();
    KioskController::new(
        assets,
        &SelectionTuning::default(),
        Box::new(JsonFileSink::new(export_dir)),
    )
}

/// Pump `frames` iterations through source → detector → controller
fn pump(
    controller: &mut KioskController,
    source: &mut dyn FrameSource,
    detector: &mut dyn HandDetector,
    frames: usize,
) {
    for _ in 0..frames {
        let frame = source.read_frame().unwrap();
        let hands = match &frame {
            Some(frame) => detector.detect(frame).unwrap(),
            None => Vec::new(),
        };
        controller.step(frame.as_ref(), &hands);
    }
}

/// Script: hold `n` fingers for the confirm window, then idle the pause out
fn answer_script(n: usize) -> Vec<Vec<Hand>> {
    let mut script = Vec::new();
    for _ in 0..HOLD_FRAMES {
        script.push(vec![Hand::with_fingers_up(n)]);
    }
    for _ in 0..PAUSE_FRAMES {
        script.push(Vec::new());
    }
    script
}

#[test]
fn test_full_survey_session_end_to_end() {
    let resources = tempfile::tempdir().unwrap();
    let exports = tempfile::tempdir().unwrap();
    let mut controller = build_controller(resources.path(), exports.path());

    let mut script = Vec::new();
    script.extend(answer_script(2));
    script.extend(answer_script(1));
    script.extend(answer_script(3));
    let total = script.len();

    let mut source = ScriptedSource::steady();
    let mut detector = ScriptedDetector::new(script);
    pump(&mut controller, &mut source, &mut detector, total);

    assert!(controller.is_complete());

    // Exactly one report, holding the answers in question order
    let reports: Vec<_> = std::fs::read_dir(exports.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    assert_eq!(reports.len(), 1);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&reports[0]).unwrap()).unwrap();
    assert_eq!(report["answers"], serde_json::json!([2, 1, 3]));
    assert!(report["session"].is_string());
    assert!(report["completed_unix_secs"].is_u64());
}

#[test]
fn test_spec_scenario_52_frames_then_pause() {
    let resources = tempfile::tempdir().unwrap();
    let exports = tempfile::tempdir().unwrap();
    let mut controller = build_controller(resources.path(), exports.path());

    let script: Vec<Vec<Hand>> = (0..HOLD_FRAMES)
        .map(|_| vec![Hand::with_fingers_up(2)])
        .collect();
    let mut source = ScriptedSource::steady();
    let mut detector = ScriptedDetector::new(script);
    pump(&mut controller, &mut source, &mut detector, HOLD_FRAMES);

    assert_eq!(controller.state().mode(), 1);
    assert_eq!(controller.state().answers()[0].map(|c| c.value()), Some(2));
    assert_eq!(controller.state().pause(), 1);

    // 60 idle frames drain the pause window
    let mut detector = ScriptedDetector::new(Vec::new());
    pump(&mut controller, &mut source, &mut detector, PAUSE_FRAMES);
    assert_eq!(controller.state().pause(), 0);
}

#[test]
fn test_flaky_capture_still_completes_survey() {
    let resources = tempfile::tempdir().unwrap();
    let exports = tempfile::tempdir().unwrap();
    let mut controller = build_controller(resources.path(), exports.path());

    // Every 5th frame is dropped; held frames freeze rather than cancel,
    // so the survey takes longer but still completes
    let mut source = ScriptedSource::flaky(5);
    let mut detector = ScriptedDetector::new(
        (0..HOLD_FRAMES * 2)
            .map(|_| vec![Hand::with_fingers_up(1)])
            .collect(),
    );
    pump(&mut controller, &mut source, &mut detector, HOLD_FRAMES * 2);

    assert_eq!(controller.state().mode(), 1);
    assert_eq!(controller.state().answers()[0].map(|c| c.value()), Some(1));
}

#[test]
fn test_gesture_noise_never_confirms() {
    let resources = tempfile::tempdir().unwrap();
    let exports = tempfile::tempdir().unwrap();
    let mut controller = build_controller(resources.path(), exports.path());

    // Oscillating counts, fists, open palms, and malformed hands
    let script: Vec<Vec<Hand>> = (0..400usize)
        .map(|i| match i % 5 {
            0 => vec![Hand::with_fingers_up(1)],
            1 => vec![Hand::with_fingers_up(2)],
            2 => vec![Hand::with_fingers_up(0)],
            3 => vec![Hand::with_fingers_up(5)],
            _ => vec![Hand::new(fingervote::vision::hand::DigitStates::from_slice(
                &[true, true],
            ))],
        })
        .collect();

    let mut source = ScriptedSource::steady();
    let mut detector = ScriptedDetector::new(script);
    pump(&mut controller, &mut source, &mut detector, 400);

    assert_eq!(controller.state().mode(), 0);
    assert!(std::fs::read_dir(exports.path()).unwrap().next().is_none());
}

#[test]
fn test_config_persistence_integration() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");

    let mut config = KioskConfig::default();
    config.manifest_path = PathBuf::from("/srv/kiosk/manifest.json");
    config.capture.device_index = 1;
    config.export.output_dir = PathBuf::from("/srv/kiosk/reports");

    ConfigManager::save_to(&config, &config_path).unwrap();
    let loaded = ConfigManager::load_from(&config_path).unwrap();

    assert_eq!(loaded.manifest_path, config.manifest_path);
    assert_eq!(loaded.capture.device_index, 1);
    assert_eq!(loaded.export.output_dir, config.export.output_dir);
}

#[test]
fn test_manifest_round_trip_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write_resources(dir.path());

    let manifest = AssetManifest::load(&manifest_path).unwrap();
    let assets = AssetLibrary::load(&manifest).unwrap();
    assert_eq!(assets.background.dimensions(), (SCREEN_W, SCREEN_H));
}

#[test]
fn test_broken_asset_set_refuses_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write_resources(dir.path());

    // Corrupt one icon by replacing it with a wrongly-sized image
    write_png(dir.path(), "icon-4.png", 10, 10, [0, 0, 0]);

    let manifest = AssetManifest::load(&manifest_path).unwrap();
    let err = AssetLibrary::load(&manifest).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("expected 65x65"), "got: {message}");
}
