//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Noise floor in logical pixels.
///
/// A gesture stays unclassified until the pointer has moved further than
/// this from the press position on either axis. Matches the common platform
/// touch slop (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// How much the vertical travel must exceed the horizontal travel before a
/// gesture is treated as a page scroll rather than a swipe.
pub const VERTICAL_DOMINANCE_MARGIN: f32 = 4.0;
