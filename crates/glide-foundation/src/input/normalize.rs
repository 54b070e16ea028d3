//! Mouse and touch event normalization.
//!
//! Every platform event shape funnels through [`normalize_event`] before it
//! reaches gesture handling, so mouse drags and touch drags are handled by
//! the same code.

use super::types::{PointerEvent, PointerEventKind, PointerType};
use glide_ui_graphics::Point;
use smallvec::SmallVec;

/// One touch point as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: i32,
    pub client: Point,
}

impl TouchPoint {
    pub fn new(identifier: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            identifier,
            client: Point::new(client_x, client_y),
        }
    }
}

pub type TouchList = SmallVec<[TouchPoint; 2]>;

/// Event shape as delivered by the platform, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum InputShape {
    Mouse {
        client: Point,
    },
    Touch {
        /// Touches currently on the surface.
        touches: TouchList,
        /// Touches that changed in this event. On touch end the lifted
        /// finger is only present here.
        changed_touches: TouchList,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawInputEvent {
    pub kind: PointerEventKind,
    pub shape: InputShape,
    pub target_in_strip: bool,
}

impl RawInputEvent {
    pub fn mouse(kind: PointerEventKind, client_x: f32, client_y: f32) -> Self {
        Self {
            kind,
            shape: InputShape::Mouse {
                client: Point::new(client_x, client_y),
            },
            target_in_strip: true,
        }
    }

    pub fn touch(
        kind: PointerEventKind,
        touches: impl IntoIterator<Item = TouchPoint>,
        changed_touches: impl IntoIterator<Item = TouchPoint>,
    ) -> Self {
        Self {
            kind,
            shape: InputShape::Touch {
                touches: touches.into_iter().collect(),
                changed_touches: changed_touches.into_iter().collect(),
            },
            target_in_strip: true,
        }
    }

    pub fn with_target_in_strip(mut self, target_in_strip: bool) -> Self {
        self.target_in_strip = target_in_strip;
        self
    }
}

/// Unifies mouse and touch shapes into one pointer event.
///
/// Touch start/move read the first active touch, touch end/cancel read the
/// first changed touch. Returns `None` when the event carries no usable
/// point (empty touch list or non-finite coordinates).
pub fn normalize_event(raw: &RawInputEvent) -> Option<PointerEvent> {
    let (position, pointer_type) = match &raw.shape {
        InputShape::Mouse { client } => (*client, PointerType::Mouse),
        InputShape::Touch {
            touches,
            changed_touches,
        } => {
            let list = match raw.kind {
                PointerEventKind::Down | PointerEventKind::Move => touches,
                PointerEventKind::Up | PointerEventKind::Cancel => changed_touches,
            };
            (list.first()?.client, PointerType::Touch)
        }
    };

    if !position.is_finite() {
        log::warn!("dropping {:?} event with non-finite position", raw.kind);
        return None;
    }

    Some(
        PointerEvent::new(raw.kind, position)
            .with_pointer_type(pointer_type)
            .with_target_in_strip(raw.target_in_strip),
    )
}
