//! Screen-space draw pass
//!
//! Renders the screen collections into an arbitrary target through an
//! orthographic camera sized to the configured screen height and the
//! target's aspect ratio. Untextured geometry merges into one flat-white
//! batch, font text into one atlas batch, and arbitrarily-textured quads
//! draw individually so each can bind its own texture.

use crate::foundation::color::Rgba;
use crate::render::api::{CullMode, DepthTest, PolygonMode, RenderBackend, TextureId};
use crate::render::primitives::{Camera, Mesh};
use crate::render::RenderResult;

use super::context::DebugRenderContext;
use super::object::DebugFillMode;

/// Output description for the screen pass
#[derive(Debug, Clone, Copy)]
pub struct ScreenTarget {
    /// Texture to render into, or `None` for the default target
    pub texture: Option<TextureId>,

    /// Target width in pixels
    pub width: u32,

    /// Target height in pixels
    pub height: u32,
}

impl ScreenTarget {
    /// Width / height of the target
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl DebugRenderContext {
    /// Draw the screen collections into `target`
    ///
    /// Tracks the target's aspect ratio for subsequent screen-space adds,
    /// even while disabled, so re-enabling does not leave stale bounds.
    pub fn render_screen(
        &mut self,
        target: &ScreenTarget,
        backend: &mut dyn RenderBackend,
    ) -> RenderResult<()> {
        self.screen_aspect = target.aspect();

        if !self.enabled {
            log::trace!("debug render disabled; screen pass skipped");
            return Ok(());
        }

        let camera = Camera::orthographic(self.config.screen_height, target.aspect(), 0.0, 1.0);

        // Split the geometry collection at draw time: plain shapes batch
        // against flat white, shaped text against the font atlas
        let mut white_batch = Mesh::empty();
        let mut font_batch = Mesh::empty();
        for object in &self.screen_objects {
            match object.fill_mode() {
                DebugFillMode::Textured => font_batch.append(object.mesh()),
                _ => white_batch.append(object.mesh()),
            }
        }

        let mut draw_calls = 0usize;

        backend.set_render_target(target.texture);
        backend.begin_camera(&camera);
        backend.set_polygon_mode(PolygonMode::Fill);
        backend.set_cull_mode(CullMode::None);
        backend.set_depth_test(DepthTest::Always, false);
        backend.set_tint(Rgba::WHITE);

        if white_batch.indices.len() >= 3 {
            backend.bind_texture(None);
            backend.draw_mesh(&white_batch)?;
            draw_calls += 1;
        }

        if font_batch.indices.len() >= 3 {
            backend.bind_texture(Some(self.font.texture()));
            backend.draw_mesh(&font_batch)?;
            draw_calls += 1;
        }

        // One draw per textured quad; each binds its own texture
        for object in &self.screen_textured_objects {
            if object.mesh().indices.len() < 3 {
                continue;
            }
            backend.bind_texture(object.texture());
            backend.draw_mesh(object.mesh())?;
            draw_calls += 1;
        }

        backend.end_camera();
        backend.set_render_target(None);

        log::trace!(
            "debug screen pass: {} objects in {} draw calls",
            self.screen_object_count(),
            draw_calls
        );
        Ok(())
    }
}
