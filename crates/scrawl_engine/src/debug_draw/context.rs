//! Debug render registry and lifecycle
//!
//! The [`DebugRenderContext`] owns every queued debug object across three
//! collections: world-space objects, screen-space geometry, and screen-space
//! quads with per-object textures. It is an explicitly constructed context
//! passed by reference to its callers; lifecycle belongs to whoever owns the
//! render loop, and consuming `shutdown` makes use-after-shutdown a compile
//! error rather than a runtime fault.
//!
//! Frame protocol, in order: `begin_frame`, the `add_*` family, `update`,
//! the draw passes, `end_frame`. All of it is single-threaded and
//! frame-synchronous; nothing here suspends or blocks.

use crate::foundation::color::{ColorFade, Rgba};
use crate::foundation::math::{Aabb2, Mat4, Vec2, Vec3};
use crate::render::api::TextureId;
use crate::render::primitives::builders;
use crate::render::systems::text::BitmapFont;

use super::object::{DebugFillMode, DebugObject, DebugRenderMode};
use super::DebugRenderConfig;

/// Shaft radius for world basis arrows, in basis-axis units
const BASIS_ARROW_RADIUS: f32 = 0.05;

/// Registry of live debug render objects plus draw configuration
pub struct DebugRenderContext {
    pub(super) config: DebugRenderConfig,
    pub(super) font: BitmapFont,
    pub(super) enabled: bool,
    pub(super) screen_aspect: f32,
    pub(super) world_objects: Vec<DebugObject>,
    pub(super) screen_objects: Vec<DebugObject>,
    pub(super) screen_textured_objects: Vec<DebugObject>,
}

impl DebugRenderContext {
    /// Start the debug render system
    ///
    /// `font` is the shared debug atlas every textured world bucket and
    /// screen text batch binds.
    pub fn startup(config: DebugRenderConfig, font: BitmapFont) -> Self {
        log::info!(
            "debug render startup: screen height {}, enabled {}",
            config.screen_height,
            config.start_enabled
        );
        Self {
            enabled: config.start_enabled,
            screen_aspect: config.default_screen_aspect,
            config,
            font,
            world_objects: Vec::new(),
            screen_objects: Vec::new(),
            screen_textured_objects: Vec::new(),
        }
    }

    /// Shut the system down, freeing every queued object
    pub fn shutdown(self) {
        log::info!(
            "debug render shutdown: dropping {} world, {} screen, {} textured objects",
            self.world_objects.len(),
            self.screen_objects.len(),
            self.screen_textured_objects.len()
        );
    }

    /// Whether the draw passes run
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Suppress or re-enable the draw passes
    ///
    /// Aging and the end-of-frame sweep keep running while disabled, so
    /// objects still expire on schedule.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Per-frame hook before any adds; currently nothing to do
    pub fn begin_frame(&mut self) {}

    /// Age every object by the previous frame's elapsed seconds
    ///
    /// Single synchronous pass: subtract lifetime, recompute colors. Runs
    /// regardless of the enabled flag.
    pub fn update(&mut self, delta_seconds: f32) {
        for object in self
            .world_objects
            .iter_mut()
            .chain(self.screen_objects.iter_mut())
            .chain(self.screen_textured_objects.iter_mut())
        {
            object.age(delta_seconds);
        }
    }

    /// Remove every expired object at end of frame
    pub fn end_frame(&mut self) {
        let before = self.object_count();
        self.world_objects.retain(|object| !object.is_old());
        self.screen_objects.retain(|object| !object.is_old());
        self.screen_textured_objects.retain(|object| !object.is_old());
        let removed = before - self.object_count();
        if removed > 0 {
            log::trace!("debug render sweep removed {} expired objects", removed);
        }
    }

    /// Total number of live objects across all collections
    pub fn object_count(&self) -> usize {
        self.world_objects.len() + self.screen_objects.len() + self.screen_textured_objects.len()
    }

    /// Number of live world-space objects
    pub fn world_object_count(&self) -> usize {
        self.world_objects.len()
    }

    /// Number of live screen-space objects, textured quads included
    pub fn screen_object_count(&self) -> usize {
        self.screen_objects.len() + self.screen_textured_objects.len()
    }

    /// The shared debug font
    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    /// Current screen-space bounds
    ///
    /// Derived from the configured screen height and the aspect ratio of
    /// the last screen-pass target (config default before the first pass).
    /// Screen coordinates are top-left origin, x right, y down.
    pub fn screen_bounds(&self) -> Aabb2 {
        Aabb2::new(
            Vec2::zeros(),
            Vec2::new(
                self.config.screen_height * self.screen_aspect,
                self.config.screen_height,
            ),
        )
    }

    // === world-space adds ===

    /// Add a world point rendered as a small cube
    pub fn add_world_point(
        &mut self,
        position: Vec3,
        radius: f32,
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::point_cube(position, radius);
        self.world_objects.push(DebugObject::new(
            build,
            &[fade],
            mode,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a world line rendered as a capped cylinder
    ///
    /// Each endpoint's half of the cylinder fades independently.
    pub fn add_world_line(
        &mut self,
        start: Vec3,
        end: Vec3,
        radius: f32,
        duration: f32,
        start_fade: ColorFade,
        end_fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::cylinder(start, end, radius, builders::DEFAULT_SIDES);
        self.world_objects.push(DebugObject::new(
            build,
            &[start_fade, end_fade],
            mode,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a world arrow: cylinder shaft, cone head
    ///
    /// The shaft fades with `start_fade`, the head with `end_fade`.
    pub fn add_world_arrow(
        &mut self,
        start: Vec3,
        end: Vec3,
        radius: f32,
        duration: f32,
        start_fade: ColorFade,
        end_fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::arrow(start, end, radius, builders::DEFAULT_SIDES);
        self.world_objects.push(DebugObject::new(
            build,
            &[start_fade, end_fade],
            mode,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a solid world quad from four counter-clockwise corners
    pub fn add_world_quad(
        &mut self,
        corners: [Vec3; 4],
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::quad(corners);
        self.world_objects.push(DebugObject::new(
            build,
            &[fade],
            mode,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a wireframe world box spanning `mins` to `maxs`
    pub fn add_world_wire_box(
        &mut self,
        mins: Vec3,
        maxs: Vec3,
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::wire_box(mins, maxs);
        self.world_objects.push(DebugObject::new(
            build,
            &[fade],
            mode,
            DebugFillMode::Wireframe,
            duration,
        ));
    }

    /// Add a wireframe world sphere
    pub fn add_world_wire_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let build = builders::wire_sphere(
            center,
            radius,
            builders::DEFAULT_SPHERE_STACKS,
            builders::DEFAULT_SPHERE_SLICES,
        );
        self.world_objects.push(DebugObject::new(
            build,
            &[fade],
            mode,
            DebugFillMode::Wireframe,
            duration,
        ));
    }

    /// Add a basis triad showing a transform's axes
    ///
    /// The x/y/z arrows fade from red/green/blue toward black as the
    /// object's lifetime runs out.
    pub fn add_world_basis(&mut self, transform: &Mat4, duration: f32, mode: DebugRenderMode) {
        let build = builders::basis(transform, BASIS_ARROW_RADIUS, builders::DEFAULT_SIDES);
        let axis_fades = [
            ColorFade::new(Rgba::RED, Rgba::BLACK),
            ColorFade::new(Rgba::GREEN, Rgba::BLACK),
            ColorFade::new(Rgba::BLUE, Rgba::BLACK),
        ];
        self.world_objects.push(DebugObject::new(
            build,
            &axis_fades,
            mode,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add world-space text oriented by a transform
    ///
    /// `alignment` places the anchor within the text block: (0, 0) is the
    /// block's bottom-left, (1, 1) its top-right, (0.5, 0.5) centered.
    pub fn add_world_text(
        &mut self,
        text: &str,
        transform: &Mat4,
        cell_height: f32,
        alignment: Vec2,
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let mut mesh = self.font.layout_text(text, cell_height);
        let size = self.font.text_bounds(text, cell_height);
        mesh.translate(Vec3::new(
            -size.x * alignment.x,
            size.y * (1.0 - alignment.y),
            0.0,
        ));
        mesh.transform(transform);
        self.world_objects.push(DebugObject::from_mesh(
            mesh,
            fade,
            mode,
            DebugFillMode::Textured,
            duration,
        ));
    }

    /// Add world-space text that always faces the camera
    ///
    /// Geometry is stored origin-local; the world pass re-orients a copy
    /// around `origin` every frame.
    pub fn add_world_billboard_text(
        &mut self,
        text: &str,
        origin: Vec3,
        cell_height: f32,
        alignment: Vec2,
        duration: f32,
        fade: ColorFade,
        mode: DebugRenderMode,
    ) {
        let mut mesh = self.font.layout_text(text, cell_height);
        let size = self.font.text_bounds(text, cell_height);
        mesh.translate(Vec3::new(
            -size.x * alignment.x,
            size.y * (1.0 - alignment.y),
            0.0,
        ));
        self.world_objects.push(
            DebugObject::from_mesh(mesh, fade, mode, DebugFillMode::Textured, duration)
                .with_billboard_anchor(origin),
        );
    }

    // === screen-space adds ===
    //
    // Callers pass top-left-origin screen coordinates; geometry is
    // re-centered on the screen midpoint before storage so the orthographic
    // screen camera can stay centered on the origin. The copy happens here,
    // at add time: mutating caller inputs afterward cannot affect queued
    // objects.

    fn recenter_to_screen_midpoint(&self, mesh: &mut crate::render::primitives::Mesh) {
        let center = self.screen_bounds().max * 0.5;
        mesh.translate(Vec3::new(-center.x, -center.y, 0.0));
    }

    /// Add a screen-space point rendered as a small square
    pub fn add_screen_point(&mut self, position: Vec2, size: f32, duration: f32, fade: ColorFade) {
        let half = Vec2::new(size * 0.5, size * 0.5);
        let mut build = builders::quad_2d(position - half, position + half);
        self.recenter_to_screen_midpoint(&mut build.mesh);
        self.screen_objects.push(DebugObject::new(
            build,
            &[fade],
            DebugRenderMode::Always,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a screen-space line with independent endpoint fades
    pub fn add_screen_line(
        &mut self,
        start: Vec2,
        end: Vec2,
        thickness: f32,
        duration: f32,
        start_fade: ColorFade,
        end_fade: ColorFade,
    ) {
        let mut build = builders::line_2d(start, end, thickness);
        self.recenter_to_screen_midpoint(&mut build.mesh);
        self.screen_objects.push(DebugObject::new(
            build,
            &[start_fade, end_fade],
            DebugRenderMode::Always,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a screen-space arrow with independent endpoint fades
    pub fn add_screen_arrow(
        &mut self,
        start: Vec2,
        end: Vec2,
        thickness: f32,
        duration: f32,
        start_fade: ColorFade,
        end_fade: ColorFade,
    ) {
        let mut build = builders::arrow_2d(start, end, thickness);
        self.recenter_to_screen_midpoint(&mut build.mesh);
        self.screen_objects.push(DebugObject::new(
            build,
            &[start_fade, end_fade],
            DebugRenderMode::Always,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a solid screen-space rectangle
    pub fn add_screen_quad(&mut self, mins: Vec2, maxs: Vec2, duration: f32, fade: ColorFade) {
        let mut build = builders::quad_2d(mins, maxs);
        self.recenter_to_screen_midpoint(&mut build.mesh);
        self.screen_objects.push(DebugObject::new(
            build,
            &[fade],
            DebugRenderMode::Always,
            DebugFillMode::Normal,
            duration,
        ));
    }

    /// Add a screen-space rectangle sampling its own texture
    ///
    /// Routed to the textured collection so the screen pass can bind the
    /// object's texture individually instead of the shared atlas. `uvs` is
    /// the sampled `[uv_min, uv_max]` rectangle, which is how sprite-sheet
    /// cells land on screen quads.
    pub fn add_screen_textured_quad(
        &mut self,
        texture: TextureId,
        mins: Vec2,
        maxs: Vec2,
        uvs: [Vec2; 2],
        duration: f32,
        fade: ColorFade,
    ) {
        let mut build = builders::quad_with_uvs(
            [
                Vec3::new(mins.x, mins.y, 0.0),
                Vec3::new(maxs.x, mins.y, 0.0),
                Vec3::new(maxs.x, maxs.y, 0.0),
                Vec3::new(mins.x, maxs.y, 0.0),
            ],
            uvs,
        );
        self.recenter_to_screen_midpoint(&mut build.mesh);
        self.screen_textured_objects.push(
            DebugObject::new(
                build,
                &[fade],
                DebugRenderMode::Always,
                DebugFillMode::Textured,
                duration,
            )
            .with_texture(texture),
        );
    }

    /// Add screen-space text in the shared debug font
    ///
    /// `alignment` places the anchor within the text block: (0, 0) is the
    /// block's top-left, (1, 1) its bottom-right, following the y-down
    /// screen convention.
    pub fn add_screen_text(
        &mut self,
        text: &str,
        position: Vec2,
        cell_height: f32,
        alignment: Vec2,
        duration: f32,
        fade: ColorFade,
    ) {
        let mut mesh = self.font.layout_text(text, cell_height);
        // Shaped text is y-up; flip into the y-down screen convention so
        // successive lines run down the screen
        for vertex in &mut mesh.vertices {
            vertex.position[1] = -vertex.position[1];
        }
        let size = self.font.text_bounds(text, cell_height);
        mesh.translate(Vec3::new(
            position.x - size.x * alignment.x,
            position.y - size.y * alignment.y,
            0.0,
        ));
        self.recenter_to_screen_midpoint(&mut mesh);
        self.screen_objects.push(DebugObject::from_mesh(
            mesh,
            fade,
            DebugRenderMode::Always,
            DebugFillMode::Textured,
            duration,
        ));
    }

    /// Add a screen-space basis: arrows along a 2D frame's i and j axes
    ///
    /// The i arrow fades from red, the j arrow from green, mirroring the
    /// world basis colors.
    pub fn add_screen_basis(
        &mut self,
        origin: Vec2,
        i_basis: Vec2,
        j_basis: Vec2,
        thickness: f32,
        duration: f32,
    ) {
        let mut build_i = builders::arrow_2d(origin, origin + i_basis, thickness);
        let build_j = builders::arrow_2d(origin, origin + j_basis, thickness);

        let i_vertices = build_i.mesh.vertices.len() as u32;
        build_i.mesh.append(&build_j.mesh);
        let total = build_i.mesh.vertices.len() as u32;
        let mut mesh = build_i.mesh;
        self.recenter_to_screen_midpoint(&mut mesh);

        let build = crate::render::primitives::PrimitiveBuild {
            mesh,
            regions: vec![0..i_vertices, i_vertices..total],
        };
        self.screen_objects.push(DebugObject::new(
            build,
            &[
                ColorFade::new(Rgba::RED, Rgba::BLACK),
                ColorFade::new(Rgba::GREEN, Rgba::BLACK),
            ],
            DebugRenderMode::Always,
            DebugFillMode::Normal,
            duration,
        ));
    }
}
