//! Pure math/data for Glide
//!
//! Geometry primitives used by the input, carousel and platform crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::Point;
}
