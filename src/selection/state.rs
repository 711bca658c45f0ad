//! Per-frame selection state and transition function
//!
//! One [`SelectionState::advance`] call corresponds to one captured frame.
//! The transition implements the hold-to-confirm gesture:
//!
//! 1. A hand holding exactly 1, 2, or 3 fingers nominates that option as
//!    the candidate. Any other count (or malformed detector output)
//!    cancels the candidate immediately. A hand leaving the view freezes
//!    the hold instead of cancelling it.
//! 2. While the candidate persists the hold counter climbs, sweeping the
//!    progress ring by `speed` degrees per frame; switching candidates
//!    restarts the sweep from zero.
//! 3. Once the sweep exceeds a full circle the answer is recorded exactly
//!    once, the survey advances, and gestures are blocked for the pause
//!    window so the lingering hand cannot double-answer the next question.

use crate::config::SelectionTuning;
use crate::render::layout::QUESTION_COUNT;
use crate::vision::Hand;
use tracing::{debug, info};

/// Degrees in a full progress-ring revolution
pub const FULL_SWEEP_DEG: u32 = 360;

/// One of the three answer options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Option 1, one finger held up
    One,
    /// Option 2, two fingers held up
    Two,
    /// Option 3, three fingers held up
    Three,
}

impl Choice {
    /// Map a raised-finger count to an option
    ///
    /// Exactly 1, 2, or 3 fingers nominate an option; everything else is
    /// "no selection".
    pub fn from_finger_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Zero-based option index (icon and ring-position lookups)
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// One-based wire value, as reported in exported reports
    pub fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// What the detector saw this frame, reduced to what the transition needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureRead {
    /// No hand in view; the hold freezes in place
    NoHand,
    /// A hand is in view with this raised-finger count
    ///
    /// `None` means the detector reported malformed digit data, which is
    /// treated like an unmappable count: the hold cancels.
    Fingers(Option<u8>),
}

impl GestureRead {
    /// Reduce a detector's output to a gesture read
    ///
    /// Only the first hand is considered, even if more are detected.
    pub fn from_hands(hands: &[Hand]) -> Self {
        match hands.first() {
            None => Self::NoHand,
            Some(hand) => Self::Fingers(hand.finger_count()),
        }
    }
}

/// Emitted by [`SelectionState::advance`] when a held answer locks in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// Which question was answered (0-based)
    pub question: usize,
    /// The confirmed option
    pub choice: Choice,
    /// True when this confirmation completed the survey
    pub survey_complete: bool,
}

/// Survey selection state, advanced once per captured frame
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Current question index; `QUESTION_COUNT` means the survey is done
    mode: usize,
    /// Candidate answer currently being held, if any
    selection: Option<Choice>,
    /// Frames the current candidate has been held
    counter: u32,
    /// Frames since the last confirmation (0 = no pause active)
    pause: u32,
    /// Confirmed answers, one slot per question, each written exactly once
    answers: [Option<Choice>; QUESTION_COUNT],
    /// Ring sweep per qualifying frame, degrees
    speed: u32,
    /// Length of the post-confirmation pause window, frames
    pause_frames: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(&SelectionTuning::default())
    }
}

impl SelectionState {
    /// Fresh state at question 0 with the given tuning
    pub fn new(tuning: &SelectionTuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            mode: 0,
            selection: None,
            counter: 0,
            pause: 0,
            answers: [None; QUESTION_COUNT],
            speed: tuning.speed_deg_per_frame,
            pause_frames: tuning.pause_frames,
        }
    }

    /// Advance one frame
    ///
    /// Returns a [`Confirmation`] when the held answer locks in this
    /// frame, `None` otherwise.
    pub fn advance(&mut self, gesture: GestureRead) -> Option<Confirmation> {
        let mut confirmation = None;

        if let GestureRead::Fingers(count) = gesture {
            if self.pause == 0 && !self.is_complete() {
                match count.and_then(Choice::from_finger_count) {
                    Some(candidate) => {
                        if self.selection == Some(candidate) {
                            self.counter += 1;
                        } else {
                            debug!("Candidate changed to {:?}, restarting hold", candidate);
                            self.selection = Some(candidate);
                            self.counter = 1;
                        }
                        if self.counter.saturating_mul(self.speed) > FULL_SWEEP_DEG {
                            confirmation = Some(self.confirm(candidate));
                        }
                    }
                    None => {
                        // 0, 4, 5, or malformed digit data: cancel outright
                        self.selection = None;
                        self.counter = 0;
                    }
                }
            }
        }

        // The pause window starts counting the frame after a confirmation
        if confirmation.is_none() && self.pause > 0 {
            self.pause += 1;
            if self.pause > self.pause_frames {
                self.pause = 0;
            }
        }

        confirmation
    }

    /// Lock in the held candidate for the current question
    fn confirm(&mut self, choice: Choice) -> Confirmation {
        let question = self.mode;
        self.answers[question] = Some(choice);
        self.mode += 1;
        self.counter = 0;
        self.selection = None;
        self.pause = 1;

        let survey_complete = self.is_complete();
        info!(
            "Question {} answered with option {}{}",
            question,
            choice.value(),
            if survey_complete { ", survey complete" } else { "" }
        );

        Confirmation {
            question,
            choice,
            survey_complete,
        }
    }

    /// Current question index; `QUESTION_COUNT` once the survey is done
    pub fn mode(&self) -> usize {
        self.mode
    }

    /// Candidate answer currently held, if any
    pub fn selection(&self) -> Option<Choice> {
        self.selection
    }

    /// Frames the current candidate has been held
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Frames since the last confirmation; 0 when no pause is active
    pub fn pause(&self) -> u32 {
        self.pause
    }

    /// Confirmed answers, one slot per question
    pub fn answers(&self) -> &[Option<Choice>; QUESTION_COUNT] {
        &self.answers
    }

    /// True once every question has been answered
    pub fn is_complete(&self) -> bool {
        self.mode >= QUESTION_COUNT
    }

    /// Progress ring sweep for the current hold, clamped to a full circle
    pub fn progress_angle(&self) -> u32 {
        self.counter.saturating_mul(self.speed).min(FULL_SWEEP_DEG)
    }

    /// Frames of constant hold needed to confirm with the current tuning
    pub fn frames_to_confirm(&self) -> u32 {
        FULL_SWEEP_DEG / self.speed + 1
    }
}
