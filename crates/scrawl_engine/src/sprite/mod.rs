//! Sprite sheets and time-addressed animation
//!
//! A [`SpriteSheet`] is an immutable UV grid over a texture; a
//! [`SpriteAnimDefinition`] maps elapsed time to an index into that grid
//! through a pure function, so animation definitions carry no playback
//! state.

pub mod anim;
pub mod sheet;

pub use anim::{frame_index, PlaybackMode, SpriteAnimDefinition};
pub use sheet::{SpriteDefinition, SpriteSheet};
