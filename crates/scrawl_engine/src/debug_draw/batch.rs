//! World-pass bucketing and batch submission
//!
//! Every live world object is classified by `(render mode, fill mode)` into
//! one of nine buckets. Each non-empty bucket merges its members into a
//! single mesh and issues one draw call with that bucket's GPU state, or
//! two calls for x-ray buckets, which draw an occluded gray pass before the
//! visible pass. The bucket table is walked in a loop; no bucket has its
//! own hand-written submission path.

use crate::foundation::color::Rgba;
use crate::render::api::{CullMode, DepthTest, PolygonMode, RenderBackend};
use crate::render::primitives::{Camera, Mesh};
use crate::render::systems::billboard;
use crate::render::RenderResult;

use super::context::DebugRenderContext;
use super::object::{DebugFillMode, DebugRenderMode};

const RENDER_MODES: [DebugRenderMode; 3] = [
    DebugRenderMode::Always,
    DebugRenderMode::UseDepth,
    DebugRenderMode::XRay,
];

const FILL_MODES: [DebugFillMode; 3] = [
    DebugFillMode::Normal,
    DebugFillMode::Wireframe,
    DebugFillMode::Textured,
];

const BUCKET_COUNT: usize = RENDER_MODES.len() * FILL_MODES.len();

fn bucket_index(mode: DebugRenderMode, fill: DebugFillMode) -> usize {
    let mode_index = match mode {
        DebugRenderMode::Always => 0,
        DebugRenderMode::UseDepth => 1,
        DebugRenderMode::XRay => 2,
    };
    let fill_index = match fill {
        DebugFillMode::Normal => 0,
        DebugFillMode::Wireframe => 1,
        DebugFillMode::Textured => 2,
    };
    mode_index * FILL_MODES.len() + fill_index
}

/// Raster, cull, and texture state shared by both draws of a bucket
fn apply_fill_state(
    backend: &mut dyn RenderBackend,
    mode: DebugRenderMode,
    fill: DebugFillMode,
    atlas: crate::render::api::TextureId,
) {
    match fill {
        DebugFillMode::Normal => {
            backend.set_polygon_mode(PolygonMode::Fill);
            // Always-on-top geometry skips culling so it reads from any side
            let cull = if mode == DebugRenderMode::Always {
                CullMode::None
            } else {
                CullMode::Back
            };
            backend.set_cull_mode(cull);
            backend.bind_texture(None);
        }
        DebugFillMode::Wireframe => {
            backend.set_polygon_mode(PolygonMode::Wireframe);
            backend.set_cull_mode(CullMode::None);
            backend.bind_texture(None);
        }
        DebugFillMode::Textured => {
            backend.set_polygon_mode(PolygonMode::Fill);
            backend.set_cull_mode(CullMode::None);
            backend.bind_texture(Some(atlas));
        }
    }
}

impl DebugRenderContext {
    /// Draw every live world object through the given camera
    ///
    /// Skipped entirely while the context is disabled: zero draw calls and
    /// no backend state changes. Billboarded objects are re-oriented
    /// through a per-frame copy; their stored geometry is untouched, so
    /// repeated draws with an unchanged camera are idempotent.
    pub fn render_world(
        &self,
        camera: &Camera,
        backend: &mut dyn RenderBackend,
    ) -> RenderResult<()> {
        if !self.enabled {
            log::trace!("debug render disabled; world pass skipped");
            return Ok(());
        }

        let mut buckets: [Mesh; BUCKET_COUNT] = std::array::from_fn(|_| Mesh::empty());
        for object in &self.world_objects {
            let bucket = &mut buckets[bucket_index(object.render_mode(), object.fill_mode())];
            if let Some(anchor) = object.billboard_anchor() {
                bucket.append(&billboard::transformed_copy(object.mesh(), camera, anchor));
            } else {
                bucket.append(object.mesh());
            }
        }

        let atlas = self.font.texture();
        let mut draw_calls = 0usize;

        backend.begin_camera(camera);
        for mode in RENDER_MODES {
            for fill in FILL_MODES {
                let mesh = &buckets[bucket_index(mode, fill)];
                if mesh.indices.len() < 3 {
                    // Nothing rasterizable in this bucket
                    continue;
                }

                apply_fill_state(backend, mode, fill, atlas);
                match mode {
                    DebugRenderMode::Always => {
                        backend.set_depth_test(DepthTest::Always, false);
                        backend.set_tint(Rgba::WHITE);
                        backend.draw_mesh(mesh)?;
                        draw_calls += 1;
                    }
                    DebugRenderMode::UseDepth => {
                        backend.set_depth_test(DepthTest::LessEqual, true);
                        backend.set_tint(Rgba::WHITE);
                        backend.draw_mesh(mesh)?;
                        draw_calls += 1;
                    }
                    DebugRenderMode::XRay => {
                        // Occluded silhouette first: inverted test, no
                        // writes, gray tint
                        backend.set_depth_test(DepthTest::GreaterEqual, false);
                        backend.set_tint(Rgba::XRAY_GRAY);
                        backend.draw_mesh(mesh)?;
                        // Then the visible portion at full tint
                        backend.set_depth_test(DepthTest::LessEqual, true);
                        backend.set_tint(Rgba::WHITE);
                        backend.draw_mesh(mesh)?;
                        draw_calls += 2;
                    }
                }
            }
        }
        backend.end_camera();

        log::trace!(
            "debug world pass: {} objects in {} draw calls",
            self.world_objects.len(),
            draw_calls
        );
        Ok(())
    }
}
