//! Asset manifest: explicit, named image paths
//!
//! The reference kiosk artwork loaded its mode and icon images in
//! filesystem listing order, which is not stable across platforms. The
//! manifest replaces that with named slots: one background, one mode panel
//! per question plus the completion screen, and one icon per
//! question/option pair, in declaration order.

use crate::error::AssetError;
use crate::render::layout::{ICON_COUNT, MODE_PANEL_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Declarative list of every image the kiosk needs
///
/// Relative paths are resolved against the manifest file's directory when
/// loaded via [`AssetManifest::load`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// 1280x720 background artwork
    pub background: PathBuf,
    /// Mode panels in question order; the last entry is the completion screen
    pub modes: Vec<PathBuf>,
    /// Answer icons in `question * 3 + option` order
    pub icons: Vec<PathBuf>,
}

impl AssetManifest {
    /// Read and validate a manifest from a JSON file
    ///
    /// Relative image paths are rebased onto the manifest's directory so a
    /// resource folder can be moved as a unit.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest: Self =
            serde_json::from_str(&json).map_err(|source| AssetError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        manifest.validate_counts()?;

        if let Some(base) = path.parent() {
            manifest.rebase(base);
        }

        Ok(manifest)
    }

    /// Check that every slot has the number of entries the layout expects
    pub fn validate_counts(&self) -> Result<(), AssetError> {
        if self.modes.len() != MODE_PANEL_COUNT {
            return Err(AssetError::WrongCount {
                kind: "mode",
                found: self.modes.len(),
                expected: MODE_PANEL_COUNT,
            });
        }
        if self.icons.len() != ICON_COUNT {
            return Err(AssetError::WrongCount {
                kind: "icon",
                found: self.icons.len(),
                expected: ICON_COUNT,
            });
        }
        Ok(())
    }

    /// Resolve relative paths against `base`
    fn rebase(&mut self, base: &Path) {
        let rebase_one = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        rebase_one(&mut self.background);
        self.modes.iter_mut().for_each(rebase_one);
        self.icons.iter_mut().for_each(rebase_one);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> AssetManifest {
        AssetManifest {
            background: PathBuf::from("background.png"),
            modes: (0..4).map(|i| PathBuf::from(format!("modes/{i}.png"))).collect(),
            icons: (0..9).map(|i| PathBuf::from(format!("icons/{i}.png"))).collect(),
        }
    }

    #[test]
    fn test_valid_counts() {
        assert!(sample_manifest().validate_counts().is_ok());
    }

    #[test]
    fn test_wrong_mode_count_rejected() {
        let mut manifest = sample_manifest();
        manifest.modes.pop();
        let err = manifest.validate_counts().unwrap_err();
        assert!(matches!(
            err,
            AssetError::WrongCount {
                kind: "mode",
                found: 3,
                expected: 4
            }
        ));
    }

    #[test]
    fn test_wrong_icon_count_rejected() {
        let mut manifest = sample_manifest();
        manifest.icons.push(PathBuf::from("icons/extra.png"));
        let err = manifest.validate_counts().unwrap_err();
        assert!(matches!(
            err,
            AssetError::WrongCount {
                kind: "icon",
                found: 10,
                expected: 9
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssetManifest::load(&dir.path().join("manifest.json")).unwrap_err();
        assert!(matches!(err, AssetError::ManifestRead { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = AssetManifest::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::ManifestParse { .. }));
    }

    #[test]
    fn test_load_rebases_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, serde_json::to_string(&sample_manifest()).unwrap()).unwrap();

        let manifest = AssetManifest::load(&path).unwrap();
        assert!(manifest.background.starts_with(dir.path()));
        assert!(manifest.modes[0].starts_with(dir.path()));
        assert!(manifest.icons[8].starts_with(dir.path()));
    }

    #[test]
    fn test_load_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");

        let mut manifest = sample_manifest();
        manifest.background = PathBuf::from("/opt/kiosk/background.png");
        std::fs::write(&path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let loaded = AssetManifest::load(&path).unwrap();
        assert_eq!(loaded.background, PathBuf::from("/opt/kiosk/background.png"));
    }
}
