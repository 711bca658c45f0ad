//! Webcam capture via `nokhwa`
//!
//! Opens the configured device, requests the kiosk resolution in RGB, and
//! converts every delivered frame to an [`RgbImage`]. Mid-loop read
//! failures are reported as "no frame this tick" so the loop can skip the
//! frame; only opening the device is fatal.

use crate::config::CaptureSettings;
use crate::error::{KioskError, Result};
use crate::vision::FrameSource;
use image::imageops::FilterType;
use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;
use tracing::{debug, info, warn};

/// Webcam frame source backed by `nokhwa`
pub struct NokhwaSource {
    camera: Camera,
    width: u32,
    height: u32,
}

impl NokhwaSource {
    /// Open the capture device and start streaming
    ///
    /// Requests the closest available format to the configured resolution
    /// at 30fps MJPEG; drivers that refuse the exact size are tolerated
    /// and frames are resized on read instead.
    pub fn open(settings: &CaptureSettings) -> Result<Self> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(settings.width, settings.height),
                FrameFormat::MJPEG,
                30,
            ),
        ));

        let mut camera = Camera::new(CameraIndex::Index(settings.device_index), requested)
            .map_err(|e| KioskError::CaptureOpenFailed(Box::new(e)))?;

        camera
            .open_stream()
            .map_err(|e| KioskError::CaptureOpenFailed(Box::new(e)))?;

        info!(
            "Capture device {} opened at {}",
            settings.device_index,
            camera.camera_format()
        );

        Ok(Self {
            camera,
            width: settings.width,
            height: settings.height,
        })
    }
}

impl FrameSource for NokhwaSource {
    fn read_frame(&mut self) -> Result<Option<RgbImage>> {
        let buffer = match self.camera.frame() {
            Ok(buffer) => buffer,
            Err(e) => {
                // Transient read failures skip the frame, per the loop contract
                debug!("Frame read failed, skipping: {e}");
                return Ok(None);
            }
        };

        let img = match buffer.decode_image::<RgbFormat>() {
            Ok(img) => img,
            Err(e) => {
                warn!("Frame decode failed, skipping: {e}");
                return Ok(None);
            }
        };

        if img.dimensions() == (self.width, self.height) {
            Ok(Some(img))
        } else {
            // Driver delivered a different resolution; the layout is fixed
            Ok(Some(image::imageops::resize(
                &img,
                self.width,
                self.height,
                FilterType::Triangle,
            )))
        }
    }
}

impl Drop for NokhwaSource {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            warn!("Failed to stop capture stream: {e}");
        } else {
            info!("Capture device released");
        }
    }
}
