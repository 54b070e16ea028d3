use glide_animation::AnimationPulse;
use glide_foundation::GesturePhase;
use glide_ui_graphics::Point;

/// Bookkeeping for the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Client position where the gesture began.
    pub start: Point,
    /// Distance from the container's left edge to the pointer at start, so
    /// the strip follows the pointer without jumping to its edge.
    pub cursor_offset: f32,
    pub phase: GesturePhase,
}

impl GestureSession {
    pub fn new(start: Point, cursor_offset: f32) -> Self {
        Self {
            start,
            cursor_offset,
            phase: GesturePhase::Unclassified,
        }
    }
}

/// Mutable carousel state. Only [`crate::Carousel`] transitions write it.
#[derive(Debug)]
pub struct CarouselState {
    pub(crate) active_index: usize,
    pub(crate) drag_offset: f32,
    pub(crate) gesture: Option<GestureSession>,
    pub(crate) pulse: AnimationPulse,
}

impl CarouselState {
    pub(crate) fn new(active_index: usize, pulse: AnimationPulse) -> Self {
        Self {
            active_index,
            drag_offset: 0.0,
            gesture: None,
            pulse,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Live horizontal drag offset; 0 while idle.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn gesture(&self) -> Option<&GestureSession> {
        self.gesture.as_ref()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture_phase(&self) -> Option<GesturePhase> {
        self.gesture.map(|session| session.phase)
    }

    pub fn is_scrolling(&self) -> bool {
        self.gesture_phase().is_some_and(GesturePhase::is_scrolling)
    }

    pub fn is_swiping(&self) -> bool {
        self.gesture_phase().is_some_and(GesturePhase::is_swiping)
    }

    pub fn is_animating(&self) -> bool {
        self.pulse.is_animating()
    }

    pub fn pulse(&self) -> &AnimationPulse {
        &self.pulse
    }

    pub(crate) fn reset_gesture(&mut self) -> Option<GestureSession> {
        self.drag_offset = 0.0;
        self.gesture.take()
    }
}
