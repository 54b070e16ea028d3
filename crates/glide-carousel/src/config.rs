use glide_animation::AnimationSpec;
use glide_foundation::GestureConfig;

/// Default side length of the arrow buttons.
pub const DEFAULT_ARROW_SIZE: f32 = 32.0;
/// Default side length of the previous/next preview buttons.
pub const DEFAULT_PREVIEW_SIZE: f32 = 32.0;
/// Horizontal margin on each side of an item.
pub const DEFAULT_ITEM_MARGIN: f32 = 8.0;

/// Static carousel configuration supplied by the host at mount time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Index shown when the carousel is created.
    pub start_index: usize,
    pub has_arrows: bool,
    pub arrow_size: f32,
    pub has_dots: bool,
    /// Show clickable previous/next preview slots beside the items area.
    pub show_prev_and_next: bool,
    pub item_preview_size: f32,
    pub item_margin: f32,
    /// Transition applied to the strip while the pulse is active.
    pub transition: AnimationSpec,
    pub gesture: GestureConfig,
}

impl CarouselConfig {
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_arrows(mut self, arrow_size: f32) -> Self {
        self.has_arrows = true;
        self.arrow_size = arrow_size;
        self
    }

    pub fn with_dots(mut self, has_dots: bool) -> Self {
        self.has_dots = has_dots;
        self
    }

    pub fn with_previews(mut self, show: bool, item_preview_size: f32) -> Self {
        self.show_prev_and_next = show;
        self.item_preview_size = item_preview_size;
        self
    }

    pub fn with_item_margin(mut self, item_margin: f32) -> Self {
        self.item_margin = item_margin;
        self
    }

    pub fn with_transition(mut self, transition: AnimationSpec) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Horizontal space taken by arrows and preview slots around the items
    /// area.
    pub fn chrome_width(&self) -> f32 {
        let arrows = if self.has_arrows {
            self.arrow_size * 2.0
        } else {
            0.0
        };
        let previews = if self.show_prev_and_next {
            self.item_preview_size * 2.0
        } else {
            0.0
        };
        arrows + previews
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            has_arrows: false,
            arrow_size: DEFAULT_ARROW_SIZE,
            has_dots: false,
            show_prev_and_next: true,
            item_preview_size: DEFAULT_PREVIEW_SIZE,
            item_margin: DEFAULT_ITEM_MARGIN,
            transition: AnimationSpec::default(),
            gesture: GestureConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chrome_is_two_previews() {
        assert_eq!(CarouselConfig::default().chrome_width(), 64.0);
    }

    #[test]
    fn arrows_and_previews_add_up() {
        let config = CarouselConfig::default()
            .with_arrows(24.0)
            .with_previews(true, 40.0);
        assert_eq!(config.chrome_width(), 48.0 + 80.0);

        let bare = CarouselConfig::default().with_previews(false, 40.0);
        assert_eq!(bare.chrome_width(), 0.0);
    }
}
