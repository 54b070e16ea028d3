use crate::config::CarouselConfig;
use crate::error::CarouselError;

/// Container measurements, taken by the host once the container is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Width of one visible item.
    pub items_area_width: f32,
    /// Margin on each side of an item.
    pub item_margin: f32,
    /// Left edge of the carousel container in client coordinates.
    pub container_left: f32,
}

impl LayoutMetrics {
    pub fn new(items_area_width: f32, item_margin: f32) -> Self {
        Self {
            items_area_width,
            item_margin,
            container_left: 0.0,
        }
    }

    pub fn with_container_left(mut self, container_left: f32) -> Self {
        self.container_left = container_left;
        self
    }

    /// Derives the items area from the full container width by removing the
    /// arrow and preview slots configured around it.
    pub fn measure(
        container_width: f32,
        container_left: f32,
        config: &CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let metrics = Self {
            items_area_width: container_width - config.chrome_width(),
            item_margin: config.item_margin,
            container_left,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        let width_ok = self.items_area_width.is_finite() && self.items_area_width > 0.0;
        let margin_ok = self.item_margin.is_finite() && self.item_margin >= 0.0;
        if width_ok && margin_ok && self.container_left.is_finite() {
            Ok(())
        } else {
            Err(CarouselError::InvalidLayout {
                width: self.items_area_width,
                margin: self.item_margin,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_removes_chrome() {
        let config = CarouselConfig::default().with_arrows(32.0);
        let metrics = LayoutMetrics::measure(500.0, 12.0, &config).expect("valid layout");
        // 2 arrows + 2 previews of 32px.
        assert_eq!(metrics.items_area_width, 372.0);
        assert_eq!(metrics.item_margin, 8.0);
        assert_eq!(metrics.container_left, 12.0);
    }

    #[test]
    fn measure_rejects_collapsed_container() {
        let config = CarouselConfig::default();
        let err = LayoutMetrics::measure(40.0, 0.0, &config).unwrap_err();
        assert_eq!(
            err,
            CarouselError::InvalidLayout {
                width: -24.0,
                margin: 8.0
            }
        );
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        assert!(LayoutMetrics::new(f32::NAN, 8.0).validate().is_err());
        assert!(LayoutMetrics::new(300.0, -1.0).validate().is_err());
        assert!(LayoutMetrics::new(300.0, 8.0)
            .with_container_left(f32::INFINITY)
            .validate()
            .is_err());
        assert!(LayoutMetrics::new(300.0, 0.0).validate().is_ok());
    }
}
