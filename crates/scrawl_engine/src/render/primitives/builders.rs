//! Primitive geometry builders for the debug-draw pipeline
//!
//! Every builder returns a [`PrimitiveBuild`]: the mesh plus the vertex
//! ranges that form its logical colorable regions. Lifetime recoloring is
//! driven entirely by those reported ranges, so color logic never assumes a
//! particular tessellation; changing a side count here cannot break the
//! recolor pass.
//!
//! Builders emit white vertices; the owning debug object recolors them
//! immediately on construction.

use std::ops::Range;

use crate::foundation::color::Rgba;
use crate::foundation::math::{constants, Mat4, Mat4Ext, Vec2, Vec3};

use super::mesh::{Mesh, Vertex};

/// Default side count for cylinder/cone tessellation
pub const DEFAULT_SIDES: u32 = 8;

/// Default stack/slice counts for wire spheres
pub const DEFAULT_SPHERE_STACKS: u32 = 8;

/// Slice count paired with [`DEFAULT_SPHERE_STACKS`]
pub const DEFAULT_SPHERE_SLICES: u32 = 16;

/// Fraction of an arrow's length taken by the shaft
const ARROW_SHAFT_FRACTION: f32 = 0.75;

/// Arrow head radius as a multiple of the shaft radius
const ARROW_HEAD_RADIUS_SCALE: f32 = 2.0;

/// A built primitive: geometry plus its colorable vertex regions
#[derive(Debug, Clone)]
pub struct PrimitiveBuild {
    /// The built geometry
    pub mesh: Mesh,

    /// Colorable vertex ranges in build order
    ///
    /// One entry for uniformly-colored primitives, one per endpoint for
    /// lines and arrows, one per axis for basis triads.
    pub regions: Vec<Range<u32>>,
}

impl PrimitiveBuild {
    fn single_region(mesh: Mesh) -> Self {
        let count = mesh.vertices.len() as u32;
        Self { mesh, regions: vec![0..count] }
    }
}

/// Build two unit vectors perpendicular to `axis` and to each other
fn perpendicular_basis(axis: Vec3) -> (Vec3, Vec3) {
    // Pick the world axis least aligned with the input to avoid degeneracy
    let reference = if axis.x.abs() < 0.9 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    };
    let i = axis.cross(&reference).normalize();
    let j = axis.cross(&i);
    (i, j)
}

fn box_mesh(mins: Vec3, maxs: Vec3) -> Mesh {
    let vertices = vec![
        // Front face (+Z)
        Vertex::from_position(Vec3::new(mins.x, mins.y, maxs.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(maxs.x, mins.y, maxs.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(maxs.x, maxs.y, maxs.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(mins.x, maxs.y, maxs.z), Rgba::WHITE),
        // Back face (-Z)
        Vertex::from_position(Vec3::new(mins.x, mins.y, mins.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(mins.x, maxs.y, mins.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(maxs.x, maxs.y, mins.z), Rgba::WHITE),
        Vertex::from_position(Vec3::new(maxs.x, mins.y, mins.z), Rgba::WHITE),
    ];

    let indices = vec![
        // Front
        0, 1, 2, 2, 3, 0,
        // Back
        4, 5, 6, 6, 7, 4,
        // Left
        4, 0, 3, 3, 5, 4,
        // Right
        1, 7, 6, 6, 2, 1,
        // Top
        3, 2, 6, 6, 5, 3,
        // Bottom
        4, 7, 1, 1, 0, 4,
    ];

    Mesh::new(vertices, indices)
}

/// Small axis-aligned cube marking a world point
pub fn point_cube(center: Vec3, radius: f32) -> PrimitiveBuild {
    let half = Vec3::new(radius, radius, radius);
    PrimitiveBuild::single_region(box_mesh(center - half, center + half))
}

/// Solid box spanning `mins` to `maxs`
pub fn solid_box(mins: Vec3, maxs: Vec3) -> PrimitiveBuild {
    PrimitiveBuild::single_region(box_mesh(mins, maxs))
}

/// Capped cylinder between two points
///
/// Regions: `[start ring + start cap, end ring + end cap]`, so each
/// endpoint's half can fade independently.
pub fn cylinder(start: Vec3, end: Vec3, radius: f32, sides: u32) -> PrimitiveBuild {
    let axis = (end - start).normalize();
    let (i, j) = perpendicular_basis(axis);

    let mut vertices = Vec::with_capacity(2 * sides as usize + 2);
    let mut indices = Vec::new();

    let ring_offsets: Vec<Vec3> = (0..sides)
        .map(|s| {
            let theta = constants::TAU * s as f32 / sides as f32;
            (i * theta.cos() + j * theta.sin()) * radius
        })
        .collect();

    // Start ring then start cap center
    for offset in &ring_offsets {
        vertices.push(Vertex::from_position(start + offset, Rgba::WHITE));
    }
    vertices.push(Vertex::from_position(start, Rgba::WHITE));

    // End ring then end cap center
    for offset in &ring_offsets {
        vertices.push(Vertex::from_position(end + offset, Rgba::WHITE));
    }
    vertices.push(Vertex::from_position(end, Rgba::WHITE));

    let start_center = sides;
    let end_ring_base = sides + 1;
    let end_center = 2 * sides + 1;

    for s in 0..sides {
        let next = (s + 1) % sides;
        let b0 = s;
        let b1 = next;
        let t0 = end_ring_base + s;
        let t1 = end_ring_base + next;

        // Side quad
        indices.extend_from_slice(&[b0, b1, t1, b0, t1, t0]);
        // Caps
        indices.extend_from_slice(&[start_center, b1, b0]);
        indices.extend_from_slice(&[end_center, t0, t1]);
    }

    PrimitiveBuild {
        mesh: Mesh::new(vertices, indices),
        regions: vec![0..sides + 1, end_ring_base..2 * sides + 2],
    }
}

/// Capped cone from a base disc to a tip point
pub fn cone(base: Vec3, tip: Vec3, radius: f32, sides: u32) -> PrimitiveBuild {
    let axis = (tip - base).normalize();
    let (i, j) = perpendicular_basis(axis);

    let mut vertices = Vec::with_capacity(sides as usize + 2);
    let mut indices = Vec::new();

    for s in 0..sides {
        let theta = constants::TAU * s as f32 / sides as f32;
        let offset = (i * theta.cos() + j * theta.sin()) * radius;
        vertices.push(Vertex::from_position(base + offset, Rgba::WHITE));
    }
    vertices.push(Vertex::from_position(base, Rgba::WHITE));
    vertices.push(Vertex::from_position(tip, Rgba::WHITE));

    let base_center = sides;
    let apex = sides + 1;

    for s in 0..sides {
        let next = (s + 1) % sides;
        indices.extend_from_slice(&[s, next, apex]);
        indices.extend_from_slice(&[base_center, next, s]);
    }

    PrimitiveBuild::single_region(Mesh::new(vertices, indices))
}

/// Arrow: cylinder shaft plus cone head
///
/// Regions: `[shaft, head]`, matching the line convention of one colorable
/// region per endpoint.
pub fn arrow(start: Vec3, end: Vec3, radius: f32, sides: u32) -> PrimitiveBuild {
    let shaft_end = start + (end - start) * ARROW_SHAFT_FRACTION;

    let shaft = cylinder(start, shaft_end, radius, sides);
    let head = cone(shaft_end, end, radius * ARROW_HEAD_RADIUS_SCALE, sides);

    let shaft_vertices = shaft.mesh.vertices.len() as u32;
    let mut mesh = shaft.mesh;
    mesh.append(&head.mesh);
    let total = mesh.vertices.len() as u32;

    PrimitiveBuild {
        mesh,
        regions: vec![0..shaft_vertices, shaft_vertices..total],
    }
}

/// Single quad from four corners in counter-clockwise order
///
/// UVs run (0,0) at the first corner to (1,1) at the third, so the same
/// builder serves textured and untextured quads.
pub fn quad(corners: [Vec3; 4]) -> PrimitiveBuild {
    quad_with_uvs(corners, [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)])
}

/// Single quad with explicit min/max UVs
pub fn quad_with_uvs(corners: [Vec3; 4], uv_bounds: [Vec2; 2]) -> PrimitiveBuild {
    let [uv_min, uv_max] = uv_bounds;
    let vertices = vec![
        Vertex::from_position_uv(corners[0], Rgba::WHITE, Vec2::new(uv_min.x, uv_min.y)),
        Vertex::from_position_uv(corners[1], Rgba::WHITE, Vec2::new(uv_max.x, uv_min.y)),
        Vertex::from_position_uv(corners[2], Rgba::WHITE, Vec2::new(uv_max.x, uv_max.y)),
        Vertex::from_position_uv(corners[3], Rgba::WHITE, Vec2::new(uv_min.x, uv_max.y)),
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    PrimitiveBuild::single_region(Mesh::new(vertices, indices))
}

/// Box intended for wireframe display
///
/// Geometry is a plain box; the wireframe appearance comes from the
/// bucket's polygon mode, not from edge geometry.
pub fn wire_box(mins: Vec3, maxs: Vec3) -> PrimitiveBuild {
    PrimitiveBuild::single_region(box_mesh(mins, maxs))
}

/// Latitude/longitude sphere intended for wireframe display
pub fn wire_sphere(center: Vec3, radius: f32, stacks: u32, slices: u32) -> PrimitiveBuild {
    let mut vertices = Vec::with_capacity(((stacks + 1) * slices) as usize);
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        let phi = constants::PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..slices {
            let theta = constants::TAU * slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let offset = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta) * radius;
            vertices.push(Vertex::from_position(center + offset, Rgba::WHITE));
        }
    }

    let index_of = |stack: u32, slice: u32| stack * slices + (slice % slices);
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = index_of(stack, slice);
            let b = index_of(stack, slice + 1);
            let c = index_of(stack + 1, slice + 1);
            let d = index_of(stack + 1, slice);
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    PrimitiveBuild::single_region(Mesh::new(vertices, indices))
}

/// Basis triad: one arrow along each axis of a transform
///
/// Regions: `[x axis, y axis, z axis]`, colored red/green/blue by the
/// owning object. Axis lengths come from the transform's basis vectors.
pub fn basis(transform: &Mat4, radius: f32, sides: u32) -> PrimitiveBuild {
    let origin = Mat4Ext::transform_point(transform, Vec3::zeros());
    let x_tip = Mat4Ext::transform_point(transform, Vec3::new(1.0, 0.0, 0.0));
    let y_tip = Mat4Ext::transform_point(transform, Vec3::new(0.0, 1.0, 0.0));
    let z_tip = Mat4Ext::transform_point(transform, Vec3::new(0.0, 0.0, 1.0));

    let mut mesh = Mesh::empty();
    let mut regions = Vec::with_capacity(3);

    for tip in [x_tip, y_tip, z_tip] {
        let axis_arrow = arrow(origin, tip, radius, sides);
        let region_start = mesh.vertices.len() as u32;
        mesh.append(&axis_arrow.mesh);
        regions.push(region_start..mesh.vertices.len() as u32);
    }

    PrimitiveBuild { mesh, regions }
}

/// Axis-aligned rectangle at z = 0 for screen-space geometry
pub fn quad_2d(mins: Vec2, maxs: Vec2) -> PrimitiveBuild {
    quad([
        Vec3::new(mins.x, mins.y, 0.0),
        Vec3::new(maxs.x, mins.y, 0.0),
        Vec3::new(maxs.x, maxs.y, 0.0),
        Vec3::new(mins.x, maxs.y, 0.0),
    ])
}

/// Thick 2D line at z = 0
///
/// Regions: `[start edge, end edge]`, two vertices each.
pub fn line_2d(start: Vec2, end: Vec2, thickness: f32) -> PrimitiveBuild {
    let direction = (end - start).normalize();
    let normal = Vec2::new(-direction.y, direction.x) * (thickness * 0.5);

    let vertices = vec![
        Vertex::from_position(Vec3::new(start.x - normal.x, start.y - normal.y, 0.0), Rgba::WHITE),
        Vertex::from_position(Vec3::new(start.x + normal.x, start.y + normal.y, 0.0), Rgba::WHITE),
        Vertex::from_position(Vec3::new(end.x + normal.x, end.y + normal.y, 0.0), Rgba::WHITE),
        Vertex::from_position(Vec3::new(end.x - normal.x, end.y - normal.y, 0.0), Rgba::WHITE),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];

    PrimitiveBuild {
        mesh: Mesh::new(vertices, indices),
        regions: vec![0..2, 2..4],
    }
}

/// Thick 2D arrow: line body plus triangular head, at z = 0
///
/// Regions: `[start edge, end edge + head]`.
pub fn arrow_2d(start: Vec2, end: Vec2, thickness: f32) -> PrimitiveBuild {
    let length = (end - start).norm();
    let direction = (end - start) / length;
    let head_length = (thickness * 3.0).min(length * 0.5);
    let head_base = end - direction * head_length;
    let normal = Vec2::new(-direction.y, direction.x);

    let body = line_2d(start, head_base, thickness);
    let mut mesh = body.mesh;

    let head_half_width = thickness * 1.5;
    let head_base_index = mesh.vertices.len() as u32;
    let left = head_base + normal * head_half_width;
    let right = head_base - normal * head_half_width;
    mesh.vertices.push(Vertex::from_position(Vec3::new(left.x, left.y, 0.0), Rgba::WHITE));
    mesh.vertices.push(Vertex::from_position(Vec3::new(right.x, right.y, 0.0), Rgba::WHITE));
    mesh.vertices.push(Vertex::from_position(Vec3::new(end.x, end.y, 0.0), Rgba::WHITE));
    mesh.indices.extend_from_slice(&[head_base_index, head_base_index + 1, head_base_index + 2]);

    let total = mesh.vertices.len() as u32;
    PrimitiveBuild {
        mesh,
        regions: vec![0..2, 2..total],
    }
}
