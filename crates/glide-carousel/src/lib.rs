//! Gesture-driven horizontal carousel
//!
//! [`Carousel`] owns the active index, the live drag offset, the
//! once-per-gesture scroll/swipe classification and the snap animation
//! pulse. Hosts feed it normalized [`PointerEvent`]s and control-surface
//! calls, then read a [`CarouselFrame`] to position the item strip.
//!
//! ```ignore
//! let mut carousel = Carousel::new(5, CarouselConfig::default())?;
//! carousel.set_layout(LayoutMetrics::measure(400.0, 0.0, carousel.config())?)?;
//! carousel.handle(&event);
//! let frame = carousel.frame();
//! ```

mod carousel;
mod config;
mod error;
mod frame;
pub mod geometry;
mod items;
mod layout;
mod state;

pub use carousel::Carousel;
pub use config::{CarouselConfig, DEFAULT_ARROW_SIZE, DEFAULT_ITEM_MARGIN, DEFAULT_PREVIEW_SIZE};
pub use error::CarouselError;
pub use frame::{CarouselFrame, DotIndicator};
pub use items::{ItemSet, ItemSlot};
pub use layout::LayoutMetrics;
pub use state::{CarouselState, GestureSession};

pub use glide_animation::{AnimationSpec, Clock, Easing, ManualClock, SystemClock, TimerHandle};
pub use glide_foundation::{GestureConfig, GesturePhase, PointerEvent, PointerEventKind};

pub type Result<T> = std::result::Result<T, CarouselError>;

pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, CarouselError, CarouselFrame, DotIndicator, ItemSet, ItemSlot,
        LayoutMetrics,
    };
}
