//! Carousel state machine.
//!
//! Idle → gesture started (unclassified) → scrolling | swiping → idle.
//! Index changes go through [`Carousel::increment`], [`Carousel::decrement`]
//! and [`Carousel::set_index`], which saturate at the ends and pulse the
//! animation flag.

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::frame::{CarouselFrame, DotIndicator};
use crate::geometry;
use crate::items::ItemSet;
use crate::layout::LayoutMetrics;
use crate::state::{CarouselState, GestureSession};
use glide_animation::{AnimationPulse, Clock, Instant, SystemClock, TimerHandle};
use glide_foundation::{GesturePhase, PointerEvent, PointerEventKind};

pub struct Carousel<C: Clock = SystemClock> {
    config: CarouselConfig,
    item_count: usize,
    layout: Option<LayoutMetrics>,
    state: CarouselState,
    clock: C,
}

impl Carousel<SystemClock> {
    pub fn new(item_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        Self::with_clock(item_count, config, SystemClock)
    }

    pub fn for_items<T>(items: &ItemSet<T>, config: CarouselConfig) -> Result<Self, CarouselError> {
        Self::new(items.len(), config)
    }
}

impl<C: Clock> Carousel<C> {
    pub fn with_clock(
        item_count: usize,
        config: CarouselConfig,
        clock: C,
    ) -> Result<Self, CarouselError> {
        if item_count == 0 {
            return Err(CarouselError::EmptyItemSet);
        }
        if config.start_index >= item_count {
            return Err(CarouselError::StartIndexOutOfRange {
                start: config.start_index,
                count: item_count,
            });
        }
        let pulse = AnimationPulse::with_duration(config.transition.duration());
        Ok(Self {
            config,
            item_count,
            layout: None,
            state: CarouselState::new(config.start_index, pulse),
            clock,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn layout(&self) -> Option<&LayoutMetrics> {
        self.layout.as_ref()
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn drag_offset(&self) -> f32 {
        self.state.drag_offset
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.state.is_gesture_active()
    }

    pub fn gesture_phase(&self) -> Option<GesturePhase> {
        self.state.gesture_phase()
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling()
    }

    pub fn is_swiping(&self) -> bool {
        self.state.is_swiping()
    }

    pub fn is_first(&self) -> bool {
        self.state.active_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.active_index == self.last_index()
    }

    fn last_index(&self) -> usize {
        self.item_count - 1
    }

    /// Current swipe commit distance, if the layout is measured.
    pub fn threshold(&self) -> Option<f32> {
        self.layout.as_ref().and_then(geometry::threshold)
    }

    /// Installs fresh container measurements. Invalid metrics are rejected
    /// and the previous ones stay in effect.
    pub fn set_layout(&mut self, metrics: LayoutMetrics) -> Result<(), CarouselError> {
        if let Err(err) = metrics.validate() {
            log::warn!("rejecting carousel layout: {err}");
            return Err(err);
        }
        if let (Some(previous), Some(session)) = (self.layout, self.state.gesture.as_mut()) {
            // Keep the strip under the pointer if the container moved mid-gesture.
            session.cursor_offset -= metrics.container_left - previous.container_left;
        }
        self.layout = Some(metrics);
        Ok(())
    }

    /// The item set changed length. The active index is clamped into range.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), CarouselError> {
        if item_count == 0 {
            return Err(CarouselError::EmptyItemSet);
        }
        self.item_count = item_count;
        if self.state.active_index > self.last_index() {
            log::debug!(
                "item count shrank to {item_count}; clamping index {}",
                self.state.active_index
            );
            self.state.active_index = self.last_index();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Gesture transitions
    // ------------------------------------------------------------------

    /// Routes a normalized event to the matching gesture transition.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.gesture_start(event),
            PointerEventKind::Move => self.gesture_move(event),
            PointerEventKind::Up => self.gesture_end(event),
            PointerEventKind::Cancel => self.gesture_cancel(),
        }
    }

    /// Opens a gesture session. Ignored until the layout is measured, so the
    /// cursor offset is always taken against a real container edge.
    pub fn gesture_start(&mut self, event: &PointerEvent) {
        let Some(layout) = self.layout else {
            log::trace!("ignoring gesture start before the layout is measured");
            return;
        };
        // Suppress the native image/link drag.
        event.consume();
        let session = GestureSession::new(event.position, event.position.x - layout.container_left);
        if self.state.gesture.replace(session).is_some() {
            log::trace!("gesture restarted before the previous one ended");
        }
        self.state.drag_offset = 0.0;
    }

    pub fn gesture_move(&mut self, event: &PointerEvent) {
        // Mouse move fires continuously; only track between start and end.
        let Some(session) = self.state.gesture.as_mut() else {
            return;
        };
        let Some(layout) = self.layout else {
            return;
        };
        let Some(threshold) = geometry::threshold(&layout) else {
            return;
        };

        session.phase = session
            .phase
            .advance(session.start, event.position, &self.config.gesture);
        match session.phase {
            GesturePhase::Unclassified | GesturePhase::Scrolling => return,
            GesturePhase::Swiping => event.consume(),
        }

        let delta = geometry::delta_x(event, session.start);
        let cursor_offset = session.cursor_offset;
        let index = self.state.active_index;

        // Nothing beyond the ends: hold the strip a threshold past the edge.
        if index == self.item_count - 1 && delta < -threshold {
            self.state.drag_offset = -threshold;
            return;
        }
        if index == 0 && delta > threshold {
            self.state.drag_offset = threshold;
            return;
        }
        if !event.target_in_strip {
            log::trace!("ignoring move outside the item strip");
            return;
        }
        self.state.drag_offset = (event.position.x - layout.container_left) - cursor_offset;
    }

    pub fn gesture_end(&mut self, event: &PointerEvent) {
        let Some(session) = self.state.reset_gesture() else {
            return;
        };
        if !session.phase.is_swiping() {
            return;
        }
        event.consume();

        let mut changed = false;
        if let Some(threshold) = self.threshold() {
            let delta = geometry::delta_x(event, session.start);
            if delta.abs() >= threshold {
                // Swiping right reveals the previous item.
                changed = if delta > 0.0 {
                    self.decrement()
                } else {
                    self.increment()
                };
            } else {
                log::trace!("swipe of {delta:.1}px below threshold {threshold:.1}px");
            }
        }
        if !changed {
            // Animate the strip back into place.
            self.pulse();
        }
    }

    /// Abandons the gesture (pointer cancel, touch cancel) without changing
    /// the index.
    pub fn gesture_cancel(&mut self) {
        let was_dragged = self.state.drag_offset != 0.0;
        if self.state.reset_gesture().is_some() && was_dragged {
            self.pulse();
        }
    }

    // ------------------------------------------------------------------
    // Index transitions
    // ------------------------------------------------------------------

    /// Jumps to `index`, clamped to the last item. Always pulses.
    /// Returns `true` if the index changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        let target = if index > self.last_index() {
            log::warn!(
                "set_index({index}) out of range for {} items; clamping",
                self.item_count
            );
            self.last_index()
        } else {
            index
        };
        let changed = target != self.state.active_index;
        self.state.active_index = target;
        self.pulse();
        log::debug!("carousel index set to {target}");
        changed
    }

    pub fn increment(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.state.active_index += 1;
        self.pulse();
        log::debug!("carousel index incremented to {}", self.state.active_index);
        true
    }

    pub fn decrement(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.state.active_index -= 1;
        self.pulse();
        log::debug!("carousel index decremented to {}", self.state.active_index);
        true
    }

    // ------------------------------------------------------------------
    // Animation pulse
    // ------------------------------------------------------------------

    fn pulse(&mut self) -> TimerHandle {
        let now = self.clock.now();
        self.state.pulse.pulse(now)
    }

    /// Clears the animation flag once its window has elapsed.
    /// Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.state.pulse.tick(now)
    }

    /// Delivers a host timer callback for the pulse clear.
    pub fn fire_timer(&mut self, handle: TimerHandle) -> bool {
        self.state.pulse.fire(handle)
    }

    /// Handle of the pending pulse clear, for hosts that arm real timers.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.state.pulse.pending_handle()
    }

    /// When the host should wake up to call [`Carousel::tick`].
    pub fn next_animation_deadline(&self) -> Option<Instant> {
        self.state.pulse.next_deadline()
    }

    // ------------------------------------------------------------------
    // Renderer surface
    // ------------------------------------------------------------------

    pub fn translation(&self) -> Option<f32> {
        self.layout.as_ref().map(|layout| {
            geometry::translation(layout, self.state.active_index, self.state.drag_offset)
        })
    }

    /// Strip placement for the current state; `None` until measured.
    pub fn frame(&self) -> Option<CarouselFrame> {
        let layout = self.layout.as_ref()?;
        Some(CarouselFrame {
            translation: geometry::translation(
                layout,
                self.state.active_index,
                self.state.drag_offset,
            ),
            strip_width: geometry::strip_width(layout, self.item_count),
            item_width: layout.items_area_width,
            item_margin: layout.item_margin,
            transition: self.is_animating().then_some(self.config.transition),
            can_go_previous: !self.is_first(),
            can_go_next: !self.is_last(),
            show_arrows: self.config.has_arrows,
            show_previews: self.config.show_prev_and_next,
            show_dots: self.config.has_dots,
        })
    }

    pub fn dot_indicators(&self) -> Vec<DotIndicator> {
        (0..self.item_count)
            .map(|index| DotIndicator {
                index,
                active: index == self.state.active_index,
            })
            .collect()
    }
}

impl<C: Clock> std::fmt::Debug for Carousel<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("item_count", &self.item_count)
            .field("layout", &self.layout)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
