//! Browser event source adapter.
//!
//! Turns DOM mouse/pointer and touch events into normalized pointer events,
//! forwards them to a [`Carousel`] and reports whether the host must call
//! `preventDefault`. Listener bookkeeping lives in [`ListenerRegistry`].

mod listeners;

pub use listeners::{ListenerHost, ListenerKind, ListenerOptions, ListenerRegistry};

use glide_animation::Clock;
use glide_carousel::Carousel;
use glide_foundation::{normalize_event, PointerEventKind, RawInputEvent, TouchPoint};
use glide_ui_graphics::Point;

/// What the host should do after an event was dispatched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Call `preventDefault()` on the native event.
    pub prevent_default: bool,
    /// Carousel state changed in a way the renderer can see.
    pub needs_redraw: bool,
}

/// Stateless bridge between browser event shapes and the carousel.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

/// DOM `clientX`/`clientY` are already CSS pixels.
fn client_point(x: f64, y: f64) -> Point {
    Point::new(x as f32, y as f32)
}

impl WebPlatform {
    pub fn mouse_event(
        &self,
        kind: PointerEventKind,
        client_x: f64,
        client_y: f64,
        target_in_strip: bool,
    ) -> RawInputEvent {
        let logical = client_point(client_x, client_y);
        RawInputEvent::mouse(kind, logical.x, logical.y).with_target_in_strip(target_in_strip)
    }

    /// Builds a touch event from `(identifier, client_x, client_y)` lists.
    pub fn touch_event(
        &self,
        kind: PointerEventKind,
        touches: &[(i32, f64, f64)],
        changed_touches: &[(i32, f64, f64)],
        target_in_strip: bool,
    ) -> RawInputEvent {
        let convert = |&(id, x, y): &(i32, f64, f64)| {
            let logical = client_point(x, y);
            TouchPoint::new(id, logical.x, logical.y)
        };
        RawInputEvent::touch(
            kind,
            touches.iter().map(convert),
            changed_touches.iter().map(convert),
        )
        .with_target_in_strip(target_in_strip)
    }

    /// Normalizes `raw` and runs it through the carousel.
    pub fn dispatch<C: Clock>(
        &self,
        carousel: &mut Carousel<C>,
        raw: &RawInputEvent,
    ) -> DispatchOutcome {
        let Some(event) = normalize_event(raw) else {
            return DispatchOutcome::default();
        };
        let before = (
            carousel.active_index(),
            carousel.drag_offset(),
            carousel.is_animating(),
        );
        carousel.handle(&event);
        let after = (
            carousel.active_index(),
            carousel.drag_offset(),
            carousel.is_animating(),
        );
        DispatchOutcome {
            prevent_default: event.is_consumed(),
            needs_redraw: before != after,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::WebPlatform;
    use glide_foundation::{PointerEventKind, RawInputEvent};

    fn collect(list: &web_sys::TouchList) -> Vec<(i32, f64, f64)> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|touch| {
                (
                    touch.identifier(),
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                )
            })
            .collect()
    }

    impl WebPlatform {
        pub fn from_mouse_event(
            &self,
            kind: PointerEventKind,
            event: &web_sys::MouseEvent,
            target_in_strip: bool,
        ) -> RawInputEvent {
            self.mouse_event(
                kind,
                event.client_x() as f64,
                event.client_y() as f64,
                target_in_strip,
            )
        }

        pub fn from_touch_event(
            &self,
            kind: PointerEventKind,
            event: &web_sys::TouchEvent,
            target_in_strip: bool,
        ) -> RawInputEvent {
            let touches = collect(&event.touches());
            let changed = collect(&event.changed_touches());
            self.touch_event(kind, &touches, &changed, target_in_strip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::ManualClock;
    use glide_carousel::{CarouselConfig, LayoutMetrics};

    fn carousel() -> Carousel<ManualClock> {
        let mut carousel = Carousel::with_clock(4, CarouselConfig::default(), ManualClock::new())
            .expect("valid configuration");
        carousel
            .set_layout(LayoutMetrics::new(300.0, 8.0))
            .expect("valid layout");
        carousel
    }

    #[test]
    fn mouse_and_touch_drive_the_same_swipe() {
        let platform = WebPlatform::default();

        let mut by_mouse = carousel();
        for (kind, x) in [
            (PointerEventKind::Down, 200.0),
            (PointerEventKind::Move, 100.0),
            (PointerEventKind::Up, 100.0),
        ] {
            platform.dispatch(&mut by_mouse, &platform.mouse_event(kind, x, 50.0, true));
        }

        let mut by_touch = carousel();
        for (kind, x) in [
            (PointerEventKind::Down, 200.0),
            (PointerEventKind::Move, 100.0),
        ] {
            let point = [(3, x, 50.0)];
            platform.dispatch(
                &mut by_touch,
                &platform.touch_event(kind, &point, &point, true),
            );
        }
        platform.dispatch(
            &mut by_touch,
            &platform.touch_event(PointerEventKind::Up, &[], &[(3, 100.0, 50.0)], true),
        );

        assert_eq!(by_mouse.active_index(), 1);
        assert_eq!(by_touch.active_index(), 1);
    }

    #[test]
    fn client_coordinates_pass_through_unscaled() {
        let platform = WebPlatform::default();
        let raw = platform.mouse_event(PointerEventKind::Down, 412.5, 37.25, false);
        let event = normalize_event(&raw).expect("mouse events normalize");
        assert_eq!(event.position, Point::new(412.5, 37.25));
        assert!(!event.target_in_strip);

        let raw = platform.touch_event(PointerEventKind::Up, &[], &[(7, 90.0, 12.0)], true);
        let event = normalize_event(&raw).expect("changed touch present");
        assert_eq!(event.position, Point::new(90.0, 12.0));
    }

    #[test]
    fn swipe_moves_request_prevent_default() {
        let platform = WebPlatform::default();
        let mut carousel = carousel();

        let down = platform.dispatch(
            &mut carousel,
            &platform.mouse_event(PointerEventKind::Down, 200.0, 50.0, true),
        );
        assert!(down.prevent_default);
        assert!(!down.needs_redraw);

        let drag = platform.dispatch(
            &mut carousel,
            &platform.mouse_event(PointerEventKind::Move, 170.0, 52.0, true),
        );
        assert!(drag.prevent_default);
        assert!(drag.needs_redraw);
    }

    #[test]
    fn scroll_moves_leave_native_behavior_alone() {
        let platform = WebPlatform::default();
        let mut carousel = carousel();
        platform.dispatch(
            &mut carousel,
            &platform.touch_event(PointerEventKind::Down, &[(1, 150.0, 50.0)], &[], true),
        );
        let scroll = platform.dispatch(
            &mut carousel,
            &platform.touch_event(PointerEventKind::Move, &[(1, 152.0, 140.0)], &[], true),
        );
        assert!(!scroll.prevent_default);
        assert!(!scroll.needs_redraw);
    }

    #[test]
    fn empty_touch_lists_are_dropped() {
        let platform = WebPlatform::default();
        let mut carousel = carousel();
        let outcome = platform.dispatch(
            &mut carousel,
            &platform.touch_event(PointerEventKind::Down, &[], &[], true),
        );
        assert_eq!(outcome, DispatchOutcome::default());
        assert!(!carousel.is_gesture_active());
    }
}
