use glide_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerType {
    #[default]
    Mouse,
    Touch,
}

/// Normalized pointer event with consumption tracking.
///
/// Mouse and touch input both arrive here as a single client-space point.
/// A handler that owns the gesture consumes the event; the platform adapter
/// then suppresses the native default action (page scroll, link
/// navigation, image drag).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer_type: PointerType,
    /// Position in client (viewport) coordinates.
    pub position: Point,
    /// Whether the event target lies inside the carousel's item strip.
    pub target_in_strip: bool,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            pointer_type: PointerType::Mouse,
            position,
            target_in_strip: true,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_target_in_strip(mut self, target_in_strip: bool) -> Self {
        self.target_in_strip = target_in_strip;
        self
    }

    /// Mark this event as consumed so the native default action is suppressed.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
