use glide_animation::AnimationSpec;

/// Everything a renderer needs to position the item strip for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal translation of the strip in pixels.
    pub translation: f32,
    pub strip_width: f32,
    pub item_width: f32,
    pub item_margin: f32,
    /// Present while the snap pulse is active.
    pub transition: Option<AnimationSpec>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub show_arrows: bool,
    pub show_previews: bool,
    pub show_dots: bool,
}

/// One index indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotIndicator {
    pub index: usize,
    pub active: bool,
}
