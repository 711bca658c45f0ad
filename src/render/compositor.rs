//! Frame compositing onto the background artwork
//!
//! The compositor owns a persistent working buffer seeded from the
//! background image. Each frame it blits the mirrored camera feed (when
//! one arrived), the current mode panel, the progress ring while a hold is
//! in flight, and a thumbnail for every confirmed answer. The mode panel
//! is opaque and covers the ring area, so last frame's ring never leaks;
//! the camera region deliberately keeps its previous pixels when a frame
//! is skipped.

use crate::assets::AssetLibrary;
use crate::render::layout::{
    Rect, CAMERA_REGION, ICON_SLOTS, MODE_PANEL_REGION, RING_CENTERS, RING_COLOR, RING_RADIUS,
    RING_STROKE,
};
use crate::selection::SelectionState;
use image::{Rgb, RgbImage};

/// Builds the kiosk output frame each iteration
#[derive(Debug)]
pub struct Compositor {
    frame: RgbImage,
}

impl Compositor {
    /// Create a compositor seeded with the background artwork
    pub fn new(background: &RgbImage) -> Self {
        Self {
            frame: background.clone(),
        }
    }

    /// Composite one frame
    ///
    /// `camera` is `None` when capture was skipped this tick; the camera
    /// region then shows the previous frame's pixels, matching the
    /// reference kiosk behavior.
    pub fn render(
        &mut self,
        camera: Option<&RgbImage>,
        state: &SelectionState,
        assets: &AssetLibrary,
    ) -> &RgbImage {
        if let Some(feed) = camera {
            blit(&mut self.frame, feed, CAMERA_REGION);
        }

        blit(
            &mut self.frame,
            assets.mode_panel(state.mode()),
            MODE_PANEL_REGION,
        );

        if state.counter() > 0 {
            if let Some(choice) = state.selection() {
                let (cx, cy) = RING_CENTERS[choice.index()];
                draw_ring_arc(&mut self.frame, cx, cy, state.progress_angle());
            }
        }

        for (question, answer) in state.answers().iter().enumerate() {
            if let Some(choice) = *answer {
                let (x, y) = ICON_SLOTS[question];
                let icon = assets.answer_icon(question, choice);
                blit(
                    &mut self.frame,
                    icon,
                    Rect {
                        x,
                        y,
                        w: icon.width(),
                        h: icon.height(),
                    },
                );
            }
        }

        &self.frame
    }

    /// The current composited frame
    pub fn frame(&self) -> &RgbImage {
        &self.frame
    }
}

/// Copy `src` into `dst` at the region's top-left corner
///
/// The region dimensions must match the source image; the fixed layout
/// guarantees every region fits on screen.
fn blit(dst: &mut RgbImage, src: &RgbImage, region: Rect) {
    debug_assert_eq!(src.dimensions(), (region.w, region.h));
    image::imageops::replace(dst, src, i64::from(region.x), i64::from(region.y));
}

/// Mirror a frame horizontally, in place
///
/// Applied to every captured frame before detection and display so the
/// feed behaves like a mirror for the user.
pub fn mirror_horizontal(frame: &mut RgbImage) {
    image::imageops::flip_horizontal_in_place(frame);
}

/// Pack an RGB frame into the 0RGB u32 layout window surfaces expect
pub fn pack_0rgb(frame: &RgbImage) -> Vec<u32> {
    frame
        .pixels()
        .map(|Rgb([r, g, b])| (u32::from(*r) << 16) | (u32::from(*g) << 8) | u32::from(*b))
        .collect()
}

/// Rasterize the progress arc: a stroked ring swept clockwise from the
/// positive x-axis through `sweep_deg` degrees
#[expect(
    clippy::cast_precision_loss,
    reason = "screen coordinates and sweep angles are far below f32 precision limits"
)]
fn draw_ring_arc(frame: &mut RgbImage, cx: u32, cy: u32, sweep_deg: u32) {
    let r_outer = RING_RADIUS + RING_STROKE / 2;
    let r_inner = RING_RADIUS - RING_STROKE / 2;
    let outer_sq = f32_sq(r_outer);
    let inner_sq = f32_sq(r_inner);
    let sweep = sweep_deg as f32;

    let x0 = cx.saturating_sub(r_outer);
    let y0 = cy.saturating_sub(r_outer);
    let x1 = (cx + r_outer).min(frame.width() - 1);
    let y1 = (cy + r_outer).min(frame.height() - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - cx as f32;
            let dy = y as f32 - cy as f32;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < inner_sq || dist_sq > outer_sq {
                continue;
            }
            // Image coordinates have y pointing down, so atan2(dy, dx)
            // increases clockwise on screen, matching the sweep direction
            let mut angle = dy.atan2(dx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            if angle <= sweep {
                frame.put_pixel(x, y, Rgb(RING_COLOR));
            }
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "ring radii are far below f32 precision limits"
)]
fn f32_sq(v: u32) -> f32 {
    let v = v as f32;
    v * v
}
