//! Billboard orientation matrix calculations

use crate::foundation::math::{Mat4, Vec3};
use crate::render::primitives::{Camera, Mesh};

/// Calculate the transform for camera-facing geometry
///
/// The result is the camera's orientation basis with the anchor position
/// substituted as the translation column: geometry built at the origin ends
/// up at `anchor`, oriented parallel to the view plane.
pub fn facing_matrix(camera: &Camera, anchor: Vec3) -> Mat4 {
    let basis = camera.basis();
    // Columns: [right | up | forward | anchor]
    Mat4::new(
        basis.right.x, basis.up.x, basis.forward.x, anchor.x,
        basis.right.y, basis.up.y, basis.forward.y, anchor.y,
        basis.right.z, basis.up.z, basis.forward.z, anchor.z,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Apply a billboard transform to a copy of origin-local geometry
///
/// The stored mesh is never mutated; callers get a freshly transformed copy
/// each frame, which keeps repeated draws of the same object idempotent.
pub fn transformed_copy(source: &Mesh, camera: &Camera, anchor: Vec3) -> Mesh {
    let matrix = facing_matrix(camera, anchor);
    let mut copy = source.clone();
    copy.transform(&matrix);
    copy
}
