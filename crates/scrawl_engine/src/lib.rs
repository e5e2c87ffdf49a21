//! # Scrawl Engine
//!
//! A debug-draw and sprite-animation engine layer over a renderer-agnostic
//! backend abstraction.
//!
//! ## Features
//!
//! - **Debug Drawing**: time-lived points, lines, arrows, quads, wire
//!   shapes, basis triads, world text, billboards, and screen overlays
//! - **Bucketed Batching**: one draw call per (render mode, fill mode)
//!   bucket, with x-ray double-draw for see-through highlights
//! - **Sprite Addressing**: grid sprite sheets and pure-function animation
//!   frame lookup (loop / once / ping-pong)
//! - **Backend Agnostic**: GPU work happens behind the
//!   [`render::api::RenderBackend`] trait; a recording backend ships for
//!   tests and headless runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrawl_engine::prelude::*;
//!
//! fn main() -> Result<(), scrawl_engine::render::RenderError> {
//!     // The shared debug font is a 16x16 glyph grid over an atlas texture
//!     let mut textures = TextureRegistry::new();
//!     let font_texture = textures.register("debug_font", 256, 256);
//!     let font = BitmapFont::new(SpriteSheet::new(font_texture, 16, 16));
//!
//!     let mut debug = DebugRenderContext::startup(DebugRenderConfig::default(), font);
//!     let mut backend = RecordingBackend::new();
//!     let camera = Camera::perspective(Vec3::new(0.0, 2.0, 8.0), 60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//!     // One frame: add, update, draw, sweep
//!     debug.begin_frame();
//!     debug.add_world_point(
//!         Vec3::zeros(),
//!         0.25,
//!         5.0,
//!         ColorFade::constant(Rgba::RED),
//!         DebugRenderMode::UseDepth,
//!     );
//!     debug.update(1.0 / 60.0);
//!     debug.render_world(&camera, &mut backend)?;
//!     debug.end_frame();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod debug_draw;
pub mod foundation;
pub mod render;
pub mod sprite;

/// Common imports for engine users
pub mod prelude {
    pub use crate::core::config::{AppConfig, ConfigError, FrameConfig};
    pub use crate::debug_draw::{
        DebugFillMode, DebugRenderConfig, DebugRenderContext, DebugRenderMode, ScreenTarget,
    };
    pub use crate::foundation::{
        color::{ColorFade, Rgba},
        math::{Aabb2, Mat4, Vec2, Vec3},
        time::FrameClock,
    };
    pub use crate::render::{
        api::{RecordingBackend, RenderBackend, TextureId, TextureRegistry},
        primitives::{Camera, Mesh, Vertex},
        systems::text::BitmapFont,
        RenderError, RenderResult,
    };
    pub use crate::sprite::{PlaybackMode, SpriteAnimDefinition, SpriteSheet};
}
