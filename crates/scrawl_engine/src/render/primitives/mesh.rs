//! Vertex and mesh containers for CPU-built geometry
//!
//! The debug-draw pipeline builds all of its geometry on the CPU each frame,
//! so these containers stay backend-agnostic: a vertex is position + color +
//! UV, and a mesh is a vertex array plus a triangle index array. Backends
//! receive the finished arrays and own whatever GPU-side staging they need.

use bytemuck::{Pod, Zeroable};

use crate::foundation::color::Rgba;
use crate::foundation::math::{Vec2, Vec3};

/// Vertex layout shared by every debug-draw primitive
///
/// # Memory Layout
/// `#[repr(C)]` keeps the field order stable for GPU buffer uploads;
/// 9 consecutive f32s, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in local or world space depending on the owning pass
    pub position: [f32; 3],

    /// Per-vertex RGBA color
    pub color: [f32; 4],

    /// Texture coordinates; (0, 0) for untextured geometry
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], color: [f32; 4], uv: [f32; 2]) -> Self {
        Self { position, color, uv }
    }

    /// Create an untextured vertex from math types
    pub fn from_position(position: Vec3, color: Rgba) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color: color.to_array(),
            uv: [0.0, 0.0],
        }
    }

    /// Create a textured vertex from math types
    pub fn from_position_uv(position: Vec3, color: Rgba, uv: Vec2) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color: color.to_array(),
            uv: [uv.x, uv.y],
        }
    }
}

/// Triangle mesh containing vertices and indices
///
/// The primary geometry container for the debug-draw passes. Meshes are
/// built, merged, drawn, and dropped within a single frame; there is no
/// persistent GPU residency at this layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from vertex and index arrays
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Create an empty mesh ready to accumulate geometry
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the mesh holds no indices
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append another mesh, rebasing its indices onto this vertex array
    ///
    /// This is the merge step of the per-bucket batching pass: each member
    /// object's indices are offset by the vertex count accumulated so far,
    /// so the combined mesh draws in one call.
    pub fn append(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|index| index + base));
    }

    /// Translate every vertex position by an offset
    pub fn translate(&mut self, offset: Vec3) {
        for vertex in &mut self.vertices {
            vertex.position[0] += offset.x;
            vertex.position[1] += offset.y;
            vertex.position[2] += offset.z;
        }
    }

    /// Transform every vertex position by a matrix (w = 1)
    pub fn transform(&mut self, matrix: &crate::foundation::math::Mat4) {
        use crate::foundation::math::Mat4Ext;
        for vertex in &mut self.vertices {
            let p = Vec3::new(vertex.position[0], vertex.position[1], vertex.position[2]);
            let moved = Mat4Ext::transform_point(matrix, p);
            vertex.position = [moved.x, moved.y, moved.z];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let vertices = vec![
            Vertex::new([0.0, 0.0, 0.0], [1.0; 4], [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], [1.0; 4], [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], [1.0; 4], [0.0, 1.0]),
        ];
        Mesh::new(vertices, vec![0, 1, 2])
    }

    #[test]
    fn test_vertex_size() {
        // 3 position + 4 color + 2 uv floats, no padding
        assert_eq!(std::mem::size_of::<Vertex>(), std::mem::size_of::<f32>() * 9);
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut combined = Mesh::empty();
        combined.append(&unit_triangle());
        combined.append(&unit_triangle());

        assert_eq!(combined.vertices.len(), 6);
        assert_eq!(combined.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_to_empty_is_identity() {
        let source = unit_triangle();
        let mut combined = Mesh::empty();
        combined.append(&source);
        assert_eq!(combined, source);
    }

    #[test]
    fn test_translate_moves_positions_only() {
        let mut mesh = unit_triangle();
        mesh.translate(crate::foundation::math::Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(mesh.vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(mesh.vertices[1].position, [2.0, 2.0, 3.0]);
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    }
}
