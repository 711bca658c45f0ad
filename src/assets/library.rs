//! Loaded, validated asset set
//!
//! Decodes every image named by the manifest up front, in parallel, and
//! checks each one against the dimensions the layout requires. The frame
//! loop never touches the filesystem.

use crate::error::AssetError;
use crate::render::layout::{
    self, ICON_SIZE, MODE_PANEL_REGION, QUESTION_COUNT, SCREEN_H, SCREEN_W,
};
use crate::selection::Choice;
use image::RgbImage;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

use super::manifest::AssetManifest;

/// All kiosk artwork, decoded and dimension-checked
#[derive(Debug)]
pub struct AssetLibrary {
    /// 1280x720 background
    pub background: RgbImage,
    /// Mode panels in question order; last entry is the completion screen
    modes: Vec<RgbImage>,
    /// Answer icons in `question * 3 + option` order
    icons: Vec<RgbImage>,
}

impl AssetLibrary {
    /// Decode every image in the manifest and validate its dimensions
    ///
    /// Decoding fans out across the rayon thread pool; this runs once at
    /// startup, before the frame loop.
    pub fn load(manifest: &AssetManifest) -> Result<Self, AssetError> {
        manifest.validate_counts()?;

        let background = load_sized(&manifest.background, SCREEN_W, SCREEN_H)?;

        let modes = manifest
            .modes
            .par_iter()
            .map(|path| load_sized(path, MODE_PANEL_REGION.w, MODE_PANEL_REGION.h))
            .collect::<Result<Vec<_>, _>>()?;

        let icons = manifest
            .icons
            .par_iter()
            .map(|path| load_sized(path, ICON_SIZE, ICON_SIZE))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Loaded {} mode panels and {} icons",
            modes.len(),
            icons.len()
        );

        Ok(Self {
            background,
            modes,
            icons,
        })
    }

    /// Mode panel for a question index; index 3 is the completion screen
    ///
    /// Indices past the completion screen saturate to it, so a completed
    /// survey can never read out of bounds.
    pub fn mode_panel(&self, mode: usize) -> &RgbImage {
        let idx = mode.min(self.modes.len() - 1);
        &self.modes[idx]
    }

    /// Thumbnail icon for a confirmed answer
    pub fn answer_icon(&self, question: usize, choice: Choice) -> &RgbImage {
        debug_assert!(question < QUESTION_COUNT);
        &self.icons[question * layout::OPTION_COUNT + choice.index()]
    }
}

/// Decode one image and require exact dimensions
fn load_sized(path: &Path, expected_w: u32, expected_h: u32) -> Result<RgbImage, AssetError> {
    let img = image::open(path)
        .map_err(|source| AssetError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    if img.width() != expected_w || img.height() != expected_h {
        return Err(AssetError::WrongDimensions {
            path: path.to_path_buf(),
            found_w: img.width(),
            found_h: img.height(),
            expected_w,
            expected_h,
        });
    }

    Ok(img)
}
