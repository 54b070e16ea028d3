pub mod normalize;
pub mod types;

pub use normalize::{normalize_event, InputShape, RawInputEvent, TouchList, TouchPoint};
pub use types::{PointerEvent, PointerEventKind, PointerType};
