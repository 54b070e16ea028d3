//! Robot-style driver for carousel gesture tests
//!
//! Drives a [`Carousel`] the way a platform adapter would: raw mouse or
//! touch shapes go through `normalize_event` before reaching the state
//! machine, and time only moves when the test says so.
//!
//! # Example
//!
//! ```
//! use glide_carousel::CarouselConfig;
//! use glide_testing::CarouselRobot;
//!
//! let mut robot = CarouselRobot::new(5, CarouselConfig::default(), 364.0);
//! robot.swipe_by(-120.0);
//! assert_eq!(robot.carousel().active_index(), 1);
//! robot.wait_for_idle();
//! ```

use glide_animation::ManualClock;
use glide_carousel::{Carousel, CarouselConfig, LayoutMetrics};
use glide_foundation::{normalize_event, PointerEventKind, RawInputEvent, TouchPoint};
use glide_ui_graphics::Point;

/// Which event shape the robot emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDevice {
    Mouse,
    Touch,
}

/// Programmatic control over a carousel with a manual clock.
pub struct CarouselRobot {
    carousel: Carousel<ManualClock>,
    clock: ManualClock,
    device: InputDevice,
    /// Last pointer position, used by `move_to`/`release` defaults.
    cursor: Point,
    target_in_strip: bool,
}

impl CarouselRobot {
    /// Creates a carousel measured from a container of `container_width`
    /// placed at the left edge of the viewport.
    pub fn new(item_count: usize, config: CarouselConfig, container_width: f32) -> Self {
        let metrics = LayoutMetrics::measure(container_width, 0.0, &config)
            .expect("robot container must leave room for items");
        Self::with_layout(item_count, config, metrics)
    }

    pub fn with_layout(item_count: usize, config: CarouselConfig, metrics: LayoutMetrics) -> Self {
        let clock = ManualClock::new();
        let mut carousel = Carousel::with_clock(item_count, config, clock.clone())
            .expect("robot carousel configuration must be valid");
        carousel
            .set_layout(metrics)
            .expect("robot layout must be valid");
        Self {
            carousel,
            clock,
            device: InputDevice::Mouse,
            cursor: Point::ZERO,
            target_in_strip: true,
        }
    }

    /// Emit touch events instead of mouse events.
    pub fn with_touch(mut self) -> Self {
        self.device = InputDevice::Touch;
        self
    }

    pub fn carousel(&self) -> &Carousel<ManualClock> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<ManualClock> {
        &mut self.carousel
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Whether subsequent events report a target inside the item strip.
    pub fn set_target_in_strip(&mut self, inside: bool) {
        self.target_in_strip = inside;
    }

    fn raw_event(&self, kind: PointerEventKind, position: Point) -> RawInputEvent {
        let raw = match self.device {
            InputDevice::Mouse => RawInputEvent::mouse(kind, position.x, position.y),
            InputDevice::Touch => {
                let touch = TouchPoint::new(0, position.x, position.y);
                match kind {
                    PointerEventKind::Down | PointerEventKind::Move => {
                        RawInputEvent::touch(kind, [touch], [touch])
                    }
                    PointerEventKind::Up | PointerEventKind::Cancel => {
                        RawInputEvent::touch(kind, [] as [TouchPoint; 0], [touch])
                    }
                }
            }
        };
        raw.with_target_in_strip(self.target_in_strip)
    }

    /// Sends one event. Returns `true` if the carousel consumed it (the
    /// adapter would call `preventDefault`).
    pub fn send(&mut self, kind: PointerEventKind, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        let raw = self.raw_event(kind, self.cursor);
        let Some(event) = normalize_event(&raw) else {
            log::warn!("robot produced an event that does not normalize: {raw:?}");
            return false;
        };
        self.carousel.handle(&event);
        event.is_consumed()
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Down, x, y)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Move, x, y)
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Up, x, y)
    }

    /// Releases at the last pointer position.
    pub fn release_here(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.release(x, y)
    }

    pub fn cancel(&mut self) {
        let Point { x, y } = self.cursor;
        self.send(PointerEventKind::Cancel, x, y);
    }

    /// Press, move in steps, release: a complete drag.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press(from_x, from_y);

        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.move_to(x, y);
        }

        self.release(to_x, to_y);
    }

    /// Horizontal drag of `dx` starting in the middle of the items area.
    pub fn swipe_by(&mut self, dx: f32) {
        let (x, y) = self.items_center();
        self.drag(x, y, x + dx, y);
    }

    /// Vertical drag of `dy` starting in the middle of the items area.
    pub fn scroll_by(&mut self, dy: f32) {
        let (x, y) = self.items_center();
        self.drag(x, y, x, y + dy);
    }

    fn items_center(&self) -> (f32, f32) {
        let layout = self
            .carousel
            .layout()
            .expect("robot carousel is always measured");
        (layout.container_left + layout.items_area_width / 2.0, 100.0)
    }

    /// Advances the clock and services the animation pulse.
    /// Returns `true` if the pulse changed.
    pub fn advance_time(&mut self, millis: u64) -> bool {
        self.clock.advance_millis(millis);
        self.carousel.tick()
    }

    /// Runs the clock until the pending snap animation has finished.
    pub fn wait_for_idle(&mut self) {
        if let Some(deadline) = self.carousel.next_animation_deadline() {
            let now = glide_animation::Clock::now(&self.clock);
            if deadline > now {
                self.clock.advance(deadline - now);
            }
            self.carousel.tick();
        }
    }
}
