//! Backend abstraction for the debug-draw passes
//!
//! This module defines the trait a rendering backend must implement to
//! consume the batched geometry the debug-draw pipeline produces. The
//! surface is deliberately small: bind a texture, set raster/depth state,
//! set a shader tint, and draw a finished mesh inside a camera scope.
//! Everything GPU-specific (devices, swapchains, pipeline objects) lives
//! behind an implementation of this trait.

use crate::foundation::color::Rgba;
use crate::render::primitives::{Camera, Mesh};
use crate::render::{RenderError, RenderResult};

use super::texture::TextureId;

/// Polygon rasterization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Solid-filled triangles
    Fill,

    /// Triangle edges only
    Wireframe,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    /// No culling; both faces rasterized
    None,

    /// Back faces discarded
    Back,
}

/// Depth comparison function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTest {
    /// Every fragment passes
    Always,

    /// Standard depth test
    LessEqual,

    /// Inverted test; passes only where geometry is occluded
    GreaterEqual,
}

/// Rendering backend consumed by the debug-draw passes
///
/// Implementations are expected to apply state changes lazily or eagerly as
/// they see fit; the debug-draw pipeline sets every relevant piece of state
/// before each draw, so no state leaks between buckets.
pub trait RenderBackend {
    /// Begin drawing through a camera; draws are invalid outside this scope
    fn begin_camera(&mut self, camera: &Camera);

    /// End the current camera scope
    fn end_camera(&mut self);

    /// Redirect output to a texture, or `None` for the default target
    fn set_render_target(&mut self, target: Option<TextureId>);

    /// Bind a texture for subsequent draws, or `None` for flat white
    fn bind_texture(&mut self, texture: Option<TextureId>);

    /// Set the polygon rasterization mode
    fn set_polygon_mode(&mut self, mode: PolygonMode);

    /// Set the face culling mode
    fn set_cull_mode(&mut self, mode: CullMode);

    /// Set the depth comparison function and whether depth is written
    fn set_depth_test(&mut self, test: DepthTest, write_depth: bool);

    /// Set the shader-level tint multiplied over vertex colors
    fn set_tint(&mut self, tint: Rgba);

    /// Draw a mesh with the currently bound state
    fn draw_mesh(&mut self, mesh: &Mesh) -> RenderResult<()>;
}

/// One recorded draw call with the state that was active when it was issued
#[derive(Debug, Clone)]
pub struct DrawCall {
    /// Vertex count of the drawn mesh
    pub vertex_count: usize,

    /// Index count of the drawn mesh
    pub index_count: usize,

    /// Bound texture, `None` meaning flat white
    pub texture: Option<TextureId>,

    /// Active render target, `None` meaning the default target
    pub render_target: Option<TextureId>,

    /// Active polygon mode
    pub polygon_mode: PolygonMode,

    /// Active cull mode
    pub cull_mode: CullMode,

    /// Active depth comparison
    pub depth_test: DepthTest,

    /// Whether depth writes were enabled
    pub depth_write: bool,

    /// Active shader tint
    pub tint: Rgba,
}

/// Backend that records state and draw calls instead of touching a GPU
///
/// Serves as the test double for the draw passes and as the driver for
/// headless runs: every draw is captured together with the state active at
/// submission, so tests can assert on exact draw sequences.
pub struct RecordingBackend {
    draws: Vec<DrawCall>,
    camera_depth: u32,
    render_target: Option<TextureId>,
    texture: Option<TextureId>,
    polygon_mode: PolygonMode,
    cull_mode: CullMode,
    depth_test: DepthTest,
    depth_write: bool,
    tint: Rgba,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// Create a backend with default state and no recorded draws
    pub fn new() -> Self {
        Self {
            draws: Vec::new(),
            camera_depth: 0,
            render_target: None,
            texture: None,
            polygon_mode: PolygonMode::Fill,
            cull_mode: CullMode::None,
            depth_test: DepthTest::Always,
            depth_write: false,
            tint: Rgba::WHITE,
        }
    }

    /// Draw calls recorded so far, in submission order
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Number of recorded draw calls
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    /// Forget all recorded draws, keeping current state
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_camera(&mut self, camera: &Camera) {
        log::trace!("begin camera, aspect {}", camera.aspect());
        self.camera_depth += 1;
    }

    fn end_camera(&mut self) {
        debug_assert!(self.camera_depth > 0, "end_camera without begin_camera");
        self.camera_depth = self.camera_depth.saturating_sub(1);
    }

    fn set_render_target(&mut self, target: Option<TextureId>) {
        self.render_target = target;
    }

    fn bind_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.polygon_mode = mode;
    }

    fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    fn set_depth_test(&mut self, test: DepthTest, write_depth: bool) {
        self.depth_test = test;
        self.depth_write = write_depth;
    }

    fn set_tint(&mut self, tint: Rgba) {
        self.tint = tint;
    }

    fn draw_mesh(&mut self, mesh: &Mesh) -> RenderResult<()> {
        if self.camera_depth == 0 {
            return Err(RenderError::DrawOutsideCamera);
        }

        self.draws.push(DrawCall {
            vertex_count: mesh.vertices.len(),
            index_count: mesh.indices.len(),
            texture: self.texture,
            render_target: self.render_target,
            polygon_mode: self.polygon_mode,
            cull_mode: self.cull_mode,
            depth_test: self.depth_test,
            depth_write: self.depth_write,
            tint: self.tint,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::primitives::Vertex;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![
                Vertex::from_position(Vec3::zeros(), Rgba::WHITE),
                Vertex::from_position(Vec3::new(1.0, 0.0, 0.0), Rgba::WHITE),
                Vertex::from_position(Vec3::new(0.0, 1.0, 0.0), Rgba::WHITE),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_draw_outside_camera_fails() {
        let mut backend = RecordingBackend::new();
        let result = backend.draw_mesh(&triangle());
        assert!(matches!(result, Err(RenderError::DrawOutsideCamera)));
        assert_eq!(backend.draw_count(), 0);
    }

    #[test]
    fn test_draw_records_active_state() {
        let mut backend = RecordingBackend::new();
        let camera = Camera::perspective(Vec3::new(0.0, 0.0, 5.0), 60.0, 1.0, 0.1, 100.0);

        backend.begin_camera(&camera);
        backend.set_polygon_mode(PolygonMode::Wireframe);
        backend.set_depth_test(DepthTest::LessEqual, true);
        backend.draw_mesh(&triangle()).unwrap();
        backend.end_camera();

        let draw = &backend.draws()[0];
        assert_eq!(draw.index_count, 3);
        assert_eq!(draw.polygon_mode, PolygonMode::Wireframe);
        assert_eq!(draw.depth_test, DepthTest::LessEqual);
        assert!(draw.depth_write);
    }
}
