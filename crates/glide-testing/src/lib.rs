//! Testing utilities and harness for Glide

pub mod robot;
pub mod robot_assertions;

pub use robot::*;
pub use robot_assertions::*;

pub use glide_animation::ManualClock;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use glide_animation::ManualClock;
}
