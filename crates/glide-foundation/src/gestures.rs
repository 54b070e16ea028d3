//! Scroll vs swipe classification.
//!
//! A gesture is classified once, on the first sample that leaves the noise
//! floor, and the result sticks until the gesture ends. Re-evaluating on
//! every sample makes a diagonal drag flicker between the two behaviors.

use crate::gesture_constants::{TOUCH_SLOP, VERTICAL_DOMINANCE_MARGIN};
use glide_ui_graphics::Point;

/// Classification of the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer is down but has not left the noise floor yet.
    #[default]
    Unclassified,
    /// Predominantly vertical: native scrolling owns the gesture.
    Scrolling,
    /// Predominantly horizontal: the carousel owns the gesture.
    Swiping,
}

impl GesturePhase {
    pub fn is_classified(self) -> bool {
        self != GesturePhase::Unclassified
    }

    pub fn is_scrolling(self) -> bool {
        self == GesturePhase::Scrolling
    }

    pub fn is_swiping(self) -> bool {
        self == GesturePhase::Swiping
    }

    /// Feeds one movement sample. Already classified phases are returned
    /// unchanged.
    pub fn advance(self, start: Point, current: Point, config: &GestureConfig) -> GesturePhase {
        if self.is_classified() {
            return self;
        }
        let phase = config.classify(start, current);
        if phase.is_classified() {
            log::trace!(
                "gesture classified as {:?} (dx={:.1}, dy={:.1})",
                phase,
                current.x - start.x,
                current.y - start.y
            );
        }
        phase
    }
}

/// Tuning for the classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Movement on both axes at or below this is ignored.
    pub noise_floor: f32,
    /// `|dy|` must exceed `|dx|` by more than this to count as a scroll.
    pub vertical_dominance_margin: f32,
}

impl GestureConfig {
    pub fn with_noise_floor(mut self, noise_floor: f32) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    pub fn with_vertical_dominance_margin(mut self, margin: f32) -> Self {
        self.vertical_dominance_margin = margin;
        self
    }

    /// Stateless classification of a single sample against the start point.
    pub fn classify(&self, start: Point, current: Point) -> GesturePhase {
        let delta = current - start;
        let (dx, dy) = (delta.x.abs(), delta.y.abs());
        if dx <= self.noise_floor && dy <= self.noise_floor {
            return GesturePhase::Unclassified;
        }
        if dy > dx + self.vertical_dominance_margin {
            GesturePhase::Scrolling
        } else {
            GesturePhase::Swiping
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            noise_floor: TOUCH_SLOP,
            vertical_dominance_margin: VERTICAL_DOMINANCE_MARGIN,
        }
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
