//! Kiosk controller implementation
//!
//! One [`KioskController::step`] call is one frame: reduce the detector's
//! hands to a gesture, advance the selection state machine, write the
//! report if this frame completed the survey, and composite the output
//! buffer. Capture failures arrive as `camera: None` and skip gesture
//! processing while the post-confirmation pause keeps ticking, matching
//! the reference loop structure.

use crate::assets::AssetLibrary;
use crate::config::SelectionTuning;
use crate::export::{ResultSink, SurveyReport};
use crate::render::Compositor;
use crate::selection::{GestureRead, SelectionState};
use crate::vision::Hand;
use image::RgbImage;
use tracing::{error, info, warn};

/// Coordinates the state machine, compositor, and result sink
pub struct KioskController {
    state: SelectionState,
    compositor: Compositor,
    assets: AssetLibrary,
    sink: Box<dyn ResultSink>,
    /// Guards the one-report-per-session contract
    exported: bool,
}

impl KioskController {
    /// Create a controller over a validated asset set
    pub fn new(
        assets: AssetLibrary,
        tuning: &SelectionTuning,
        sink: Box<dyn ResultSink>,
    ) -> Self {
        let compositor = Compositor::new(&assets.background);
        Self {
            state: SelectionState::new(tuning),
            compositor,
            assets,
            sink,
            exported: false,
        }
    }

    /// Process one frame and return the composited output
    ///
    /// `camera` is `None` when capture failed this tick; the frame is
    /// skipped (no gesture processing, stale camera pixels) but the pause
    /// window still advances and the output is still composited.
    pub fn step(&mut self, camera: Option<&RgbImage>, hands: &[Hand]) -> &RgbImage {
        let gesture = match camera {
            Some(_) => GestureRead::from_hands(hands),
            None => GestureRead::NoHand,
        };

        if let Some(confirmation) = self.state.advance(gesture) {
            if confirmation.survey_complete {
                self.export_report();
            }
        }

        self.compositor.render(camera, &self.state, &self.assets)
    }

    /// Current survey state, for status display and tests
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// True once the survey is finished
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Write the completed survey through the sink, once per session
    ///
    /// Export failures are logged and swallowed: the kiosk keeps running
    /// and the answers stay visible on the completion screen.
    fn export_report(&mut self) {
        if self.exported {
            warn!("Survey already exported, skipping");
            return;
        }

        let Some(report) = SurveyReport::from_answers(self.state.answers()) else {
            // Unreachable while confirmations drive completion
            error!("Survey reported complete with unanswered questions");
            return;
        };

        match self.sink.write(&report) {
            Ok(()) => {
                self.exported = true;
                info!("Session {} exported", report.session);
            }
            Err(e) => {
                error!("Failed to export survey report: {e}");
            }
        }
    }
}
