//! Foundation layer: math types, colors, and frame timing
//!
//! These modules have no dependency on the render or debug-draw layers and
//! are safe to use from any subsystem.

pub mod color;
pub mod math;
pub mod time;

pub use color::Rgba;
pub use math::{Aabb2, Mat4, Vec2, Vec3, Vec4};
pub use time::FrameClock;
