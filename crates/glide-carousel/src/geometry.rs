//! Pure conversions from input and layout to strip offsets.

use crate::layout::LayoutMetrics;
use glide_foundation::PointerEvent;
use glide_ui_graphics::Point;

/// Horizontal travel of `event` since the gesture started at `start`.
pub fn delta_x(event: &PointerEvent, start: Point) -> f32 {
    event.position.x - start.x
}

/// Distance a swipe must cover to commit an index change: a quarter of the
/// item width. `None` while the items area is unmeasured.
pub fn threshold(metrics: &LayoutMetrics) -> Option<f32> {
    let width = metrics.items_area_width;
    (width.is_finite() && width > 0.0).then(|| width / 4.0)
}

/// Distance between the left edges of two neighboring items.
pub fn item_stride(metrics: &LayoutMetrics) -> f32 {
    metrics.items_area_width + metrics.item_margin * 2.0
}

/// Horizontal offset applied to the item strip.
pub fn translation(metrics: &LayoutMetrics, active_index: usize, drag_offset: f32) -> f32 {
    -item_stride(metrics) * active_index as f32 + drag_offset
}

/// Total width of the strip holding `item_count` items side by side.
pub fn strip_width(metrics: &LayoutMetrics, item_count: usize) -> f32 {
    item_stride(metrics) * item_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_foundation::PointerEventKind;

    #[test]
    fn translation_combines_index_and_drag() {
        let metrics = LayoutMetrics::new(300.0, 8.0);
        assert_eq!(translation(&metrics, 2, 10.0), -622.0);
        assert_eq!(translation(&metrics, 0, -30.0), -30.0);
    }

    #[test]
    fn threshold_is_quarter_width() {
        assert_eq!(threshold(&LayoutMetrics::new(300.0, 8.0)), Some(75.0));
        assert_eq!(threshold(&LayoutMetrics::new(0.0, 8.0)), None);
        assert_eq!(threshold(&LayoutMetrics::new(f32::NAN, 8.0)), None);
    }

    #[test]
    fn strip_width_spans_all_items() {
        let metrics = LayoutMetrics::new(300.0, 8.0);
        assert_eq!(strip_width(&metrics, 5), 1580.0);
    }

    #[test]
    fn delta_x_is_signed() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(70.0, 0.0));
        assert_eq!(delta_x(&event, Point::new(100.0, 40.0)), -30.0);
    }
}
