//! Debug-draw system: time-lived render objects, bucketed batch drawing
//!
//! The debug-draw layer manages a collection of heterogeneous drawable
//! objects (points, lines, arrows, wire shapes, text, billboards,
//! screen-space overlays), each with a lifetime and a color fade. Every
//! frame the world pass classifies live objects by (render mode, fill
//! mode), merges each bucket into one mesh, and issues one draw call per
//! non-empty bucket; the screen pass does the same for HUD-style overlays.
//!
//! See [`DebugRenderContext`] for the frame protocol and the full add
//! family.

pub mod batch;
pub mod context;
pub mod object;
pub mod screen;

#[cfg(test)]
mod tests;

pub use context::DebugRenderContext;
pub use object::{ColorRegion, DebugFillMode, DebugObject, DebugRenderMode};
pub use screen::ScreenTarget;

use serde::{Deserialize, Serialize};

/// Configuration for the debug render system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugRenderConfig {
    /// Height of the screen-space coordinate system in virtual units
    pub screen_height: f32,

    /// Aspect ratio assumed for screen bounds before the first screen pass
    pub default_screen_aspect: f32,

    /// Whether the draw passes start enabled
    pub start_enabled: bool,
}

impl Default for DebugRenderConfig {
    fn default() -> Self {
        Self {
            screen_height: 800.0,
            default_screen_aspect: 2.0,
            start_enabled: true,
        }
    }
}
