use crate::gestures::{GestureConfig, GesturePhase};
use glide_ui_graphics::Point;

const START: Point = Point::new(100.0, 100.0);

#[test]
fn samples_inside_noise_floor_stay_unclassified() {
    let config = GestureConfig::default();
    let phase = GesturePhase::Unclassified.advance(START, Point::new(106.0, 94.0), &config);
    assert_eq!(phase, GesturePhase::Unclassified);
}

#[test]
fn horizontal_drag_classifies_as_swipe() {
    let config = GestureConfig::default();
    let phase = GesturePhase::Unclassified.advance(START, Point::new(130.0, 104.0), &config);
    assert_eq!(phase, GesturePhase::Swiping);
}

#[test]
fn vertical_drag_classifies_as_scroll() {
    let config = GestureConfig::default();
    let phase = GesturePhase::Unclassified.advance(START, Point::new(102.0, 140.0), &config);
    assert_eq!(phase, GesturePhase::Scrolling);
}

#[test]
fn near_diagonal_within_margin_defaults_to_swipe() {
    let config = GestureConfig::default();
    // |dy| exceeds |dx| by less than the dominance margin.
    let phase = GesturePhase::Unclassified.advance(START, Point::new(120.0, 122.0), &config);
    assert_eq!(phase, GesturePhase::Swiping);
}

#[test]
fn classification_is_sticky() {
    let config = GestureConfig::default();
    let phase = GesturePhase::Unclassified.advance(START, Point::new(130.0, 100.0), &config);
    assert_eq!(phase, GesturePhase::Swiping);

    // A later, clearly vertical sample does not flip the decision.
    let phase = phase.advance(START, Point::new(130.0, 300.0), &config);
    assert_eq!(phase, GesturePhase::Swiping);

    let scrolling = GesturePhase::Scrolling.advance(START, Point::new(400.0, 100.0), &config);
    assert_eq!(scrolling, GesturePhase::Scrolling);
}

#[test]
fn custom_margin_is_respected() {
    let config = GestureConfig::default().with_vertical_dominance_margin(30.0);
    let phase = config.classify(START, Point::new(110.0, 135.0));
    assert_eq!(phase, GesturePhase::Swiping);

    let config = GestureConfig::default().with_noise_floor(50.0);
    assert_eq!(
        config.classify(START, Point::new(140.0, 100.0)),
        GesturePhase::Unclassified
    );
}

#[test]
fn phase_flags_are_mutually_exclusive() {
    for phase in [
        GesturePhase::Unclassified,
        GesturePhase::Scrolling,
        GesturePhase::Swiping,
    ] {
        assert!(!(phase.is_scrolling() && phase.is_swiping()));
    }
}
