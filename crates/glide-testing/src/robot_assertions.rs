//! Assertion utilities for carousel robot tests.

use glide_animation::Clock;
use glide_carousel::Carousel;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the structural invariants that must hold after any transition.
pub fn assert_carousel_invariants<C: Clock>(carousel: &Carousel<C>, msg: &str) {
    assert!(
        carousel.active_index() < carousel.item_count(),
        "{}: index {} out of range for {} items",
        msg,
        carousel.active_index(),
        carousel.item_count()
    );
    assert!(
        !(carousel.is_scrolling() && carousel.is_swiping()),
        "{}: gesture is both scrolling and swiping",
        msg
    );
    if !carousel.is_gesture_active() {
        assert_eq!(
            carousel.drag_offset(),
            0.0,
            "{}: drag offset left over after the gesture ended",
            msg
        );
    }
}

/// Assert that no gesture is in progress and the strip rests on an item.
pub fn assert_gesture_idle<C: Clock>(carousel: &Carousel<C>, msg: &str) {
    assert!(
        !carousel.is_gesture_active(),
        "{}: gesture still active ({:?})",
        msg,
        carousel.gesture_phase()
    );
    assert_eq!(carousel.drag_offset(), 0.0, "{}: strip not at rest", msg);
}
