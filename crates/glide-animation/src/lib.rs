//! Animation support for Glide
//!
//! Provides the CSS timing of the snap transition, a [`Clock`] abstraction
//! over wall time and the [`AnimationPulse`] flag that tells a renderer when
//! to animate the item strip.

mod clock;
mod easing;
mod pulse;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::{AnimationSpec, Easing};
pub use pulse::{AnimationPulse, TimerHandle, PULSE_DURATION_MS};

pub use web_time::{Duration, Instant};
