//! Input foundation for Glide
//!
//! Pointer events, mouse/touch normalization and the once-per-gesture
//! scroll vs swipe classifier.

pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use gesture_constants::{TOUCH_SLOP, VERTICAL_DOMINANCE_MARGIN};
pub use gestures::{GestureConfig, GesturePhase};
pub use input::{
    normalize_event, InputShape, PointerEvent, PointerEventKind, PointerType, RawInputEvent,
    TouchList, TouchPoint,
};

pub use glide_ui_graphics::Point;

pub mod prelude {
    pub use crate::gestures::{GestureConfig, GesturePhase};
    pub use crate::input::{
        normalize_event, InputShape, PointerEvent, PointerEventKind, PointerType, RawInputEvent,
    };
}
