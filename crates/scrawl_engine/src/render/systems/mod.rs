//! Rendering systems built on the primitives layer

pub mod billboard;
pub mod text;

pub use text::BitmapFont;
