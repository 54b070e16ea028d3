use thiserror::Error;

/// Rejections at the configuration and measurement boundary.
///
/// Gesture and index transitions never fail; they saturate or no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    EmptyItemSet,
    #[error("start index {start} is out of range for {count} items")]
    StartIndexOutOfRange { start: usize, count: usize },
    #[error("invalid layout: items area width {width}, item margin {margin}")]
    InvalidLayout { width: f32, margin: f32 },
}
