//! CSS timing functions and tween specifications.

use web_time::Duration;

/// Easing functions, named after their CSS `transition-timing-function`
/// counterparts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease`: cubic-bezier(0.25, 0.1, 0.25, 1.0).
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Name used in CSS transition declarations.
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration plus easing for a timed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }

    /// CSS `transition` value for a property, e.g. `transform 275ms ease`.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{property} {}ms {}",
            self.duration_millis,
            self.easing.css_name()
        )
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(crate::PULSE_DURATION_MS, Easing::Ease)
    }
}
