//! # Rendering Layer
//!
//! Renderer-agnostic building blocks the debug-draw system sits on: CPU-side
//! meshes and cameras, primitive geometry builders, billboard math, bitmap
//! text shaping, and the [`api::RenderBackend`] trait that abstracts the
//! actual GPU binding layer.
//!
//! ## Architecture
//!
//! - **api**: the backend trait, texture handles, and the recording test
//!   double
//! - **primitives**: vertex/mesh containers, cameras, geometry builders
//! - **systems**: billboard orientation and bitmap-font text shaping
//!
//! Nothing in this crate talks to a GPU; a real renderer implements
//! [`api::RenderBackend`] over its own device layer.

pub mod api;
pub mod primitives;
pub mod systems;

pub use api::{RecordingBackend, RenderBackend, TextureId, TextureRegistry};
pub use primitives::{Camera, Mesh, Vertex};
pub use systems::text::BitmapFont;

use thiserror::Error;

/// Result type for backend operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors surfaced by rendering backends
///
/// The debug-draw layer itself has no recoverable error paths; these cover
/// misuse of a backend and backend-internal failures, propagated with `?`
/// through the draw passes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A mesh was submitted outside a begin/end camera scope
    #[error("draw call issued outside a begin_camera/end_camera scope")]
    DrawOutsideCamera,

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}
