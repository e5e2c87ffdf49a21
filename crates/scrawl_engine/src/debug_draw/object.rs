//! Time-lived debug render objects
//!
//! A debug object is geometry plus a visibility policy plus a lifetime. All
//! primitive variants share one representation: what differs between a
//! point, a line, and a basis triad is only how many colorable regions the
//! builder reported and which fades drive them.

use std::ops::Range;

use crate::foundation::color::{ColorFade, Rgba};
use crate::foundation::math::Vec3;
use crate::render::api::TextureId;
use crate::render::primitives::{Mesh, PrimitiveBuild};

/// Visibility policy relative to the depth buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugRenderMode {
    /// Always visible, ignoring depth
    Always,

    /// Standard depth-tested rendering
    UseDepth,

    /// Drawn twice: grayed-out where occluded, full color where visible
    XRay,
}

/// How the object's triangles are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugFillMode {
    /// Solid vertex-colored triangles
    Normal,

    /// Triangle edges only
    Wireframe,

    /// Solid triangles sampling the shared debug atlas
    Textured,
}

/// One colorable vertex range and the fade that drives it
#[derive(Debug, Clone)]
pub struct ColorRegion {
    /// Vertex range this region covers
    pub range: Range<u32>,

    /// Start/end colors over the object's lifetime
    pub fade: ColorFade,
}

/// A single queued debug render object
///
/// Owns its geometry outright; the caller keeps no handle after the add
/// call. `remaining_lifetime` only ever decreases, and the recolor step is
/// the one mutation geometry sees after construction.
#[derive(Debug, Clone)]
pub struct DebugObject {
    mesh: Mesh,
    render_mode: DebugRenderMode,
    fill_mode: DebugFillMode,
    total_lifetime: f32,
    remaining_lifetime: f32,
    color_regions: Vec<ColorRegion>,
    billboard_anchor: Option<Vec3>,
    texture: Option<TextureId>,
}

impl DebugObject {
    /// Create an object from a primitive build and per-region fades
    ///
    /// `fades` must pair one-to-one with the build's reported regions. The
    /// initial recolor runs here so the object is drawable the frame it is
    /// added.
    pub fn new(
        build: PrimitiveBuild,
        fades: &[ColorFade],
        render_mode: DebugRenderMode,
        fill_mode: DebugFillMode,
        duration: f32,
    ) -> Self {
        debug_assert_eq!(
            build.regions.len(),
            fades.len(),
            "one fade per colorable region"
        );

        let color_regions = build
            .regions
            .into_iter()
            .zip(fades.iter().copied())
            .map(|(range, fade)| ColorRegion { range, fade })
            .collect();

        let mut object = Self {
            mesh: build.mesh,
            render_mode,
            fill_mode,
            total_lifetime: duration,
            remaining_lifetime: duration,
            color_regions,
            billboard_anchor: None,
            texture: None,
        };
        object.recolor();
        object
    }

    /// Create a uniformly-faded object from a bare mesh
    ///
    /// Used for shaped text, where the whole block is one colorable region.
    pub fn from_mesh(
        mesh: Mesh,
        fade: ColorFade,
        render_mode: DebugRenderMode,
        fill_mode: DebugFillMode,
        duration: f32,
    ) -> Self {
        let vertex_count = mesh.vertices.len() as u32;
        Self::new(
            PrimitiveBuild { mesh, regions: vec![0..vertex_count] },
            &[fade],
            render_mode,
            fill_mode,
            duration,
        )
    }

    /// Lock orientation to the camera, keeping the anchor position fixed
    pub fn with_billboard_anchor(mut self, anchor: Vec3) -> Self {
        self.billboard_anchor = Some(anchor);
        self
    }

    /// Bind a specific texture instead of the shared debug atlas
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    /// The object's geometry, recolored to the current lifetime
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Visibility policy
    pub fn render_mode(&self) -> DebugRenderMode {
        self.render_mode
    }

    /// Fill policy
    pub fn fill_mode(&self) -> DebugFillMode {
        self.fill_mode
    }

    /// Billboard anchor, if the object is camera-facing
    pub fn billboard_anchor(&self) -> Option<Vec3> {
        self.billboard_anchor
    }

    /// Bound texture, if any
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Lifetime the object was created with
    pub fn total_lifetime(&self) -> f32 {
        self.total_lifetime
    }

    /// Lifetime left before the object expires
    pub fn remaining_lifetime(&self) -> f32 {
        self.remaining_lifetime
    }

    /// True once the remaining lifetime has run out
    ///
    /// Old objects are still drawn for the frame they expire in; the
    /// end-of-frame sweep removes them.
    pub fn is_old(&self) -> bool {
        self.remaining_lifetime <= 0.0
    }

    /// Fraction of lifetime remaining, 1 at spawn and 0 at expiry
    ///
    /// Zero-duration objects hold 1 so one-frame draws show their start
    /// color.
    fn life_fraction(&self) -> f32 {
        if self.total_lifetime <= 0.0 {
            return 1.0;
        }
        (self.remaining_lifetime / self.total_lifetime).clamp(0.0, 1.0)
    }

    /// Age the object by the previous frame's elapsed seconds
    pub fn age(&mut self, delta_seconds: f32) {
        self.remaining_lifetime -= delta_seconds;
        self.recolor();
    }

    /// Rewrite vertex colors from the lifetime fades
    ///
    /// Start color applies at full remaining lifetime, end color at zero.
    fn recolor(&mut self) {
        let fraction = self.life_fraction();
        for region in &self.color_regions {
            let color =
                Rgba::lerp(region.fade.end, region.fade.start, fraction).to_array();
            let range = region.range.start as usize..region.range.end as usize;
            for vertex in &mut self.mesh.vertices[range] {
                vertex.color = color;
            }
        }
    }
}
