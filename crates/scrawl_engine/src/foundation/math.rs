//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics and game development.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Axis-aligned 2D bounding box
///
/// Used for screen-space bounds and text layout extents. Stored as min/max
/// corners; no invariant enforcement beyond construction order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner
    pub min: Vec2,

    /// Maximum corner
    pub max: Vec2,
}

impl Aabb2 {
    /// Create a new bounding box from min/max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Width and height of the box
    pub fn dimensions(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a perspective projection matrix
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create an orthographic projection matrix centered at the origin
    ///
    /// `height` is the full vertical extent of the view volume; the
    /// horizontal extent is `height * aspect`.
    fn orthographic_centered(height: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Transform a point (w = 1) by this matrix
    fn transform_point(&self, point: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Depth mapped to [0, 1], +Y up in view space
        let tan_half_fovy = (fov_y * 0.5).tan();

        let mut result = Mat4::zeros();
        result[(0, 0)] = 1.0 / (aspect * tan_half_fovy);
        result[(1, 1)] = 1.0 / tan_half_fovy;
        result[(2, 2)] = far / (far - near);
        result[(2, 3)] = -(near * far) / (far - near);
        result[(3, 2)] = 1.0;

        result
    }

    fn orthographic_centered(height: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let half_height = height * 0.5;
        let half_width = half_height * aspect;

        let mut result = Mat4::identity();
        result[(0, 0)] = 1.0 / half_width;
        result[(1, 1)] = 1.0 / half_height;
        result[(2, 2)] = 1.0 / (far - near);
        result[(2, 3)] = -near / (far - near);

        result
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(&up).normalize();
        let camera_up = right.cross(&forward);

        let translation = Mat4::new(
            1.0, 0.0, 0.0, -eye.x,
            0.0, 1.0, 0.0, -eye.y,
            0.0, 0.0, 1.0, -eye.z,
            0.0, 0.0, 0.0, 1.0,
        );

        let rotation = Mat4::new(
            right.x, right.y, right.z, 0.0,
            camera_up.x, camera_up.y, camera_up.z, 0.0,
            -forward.x, -forward.y, -forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * translation
    }

    fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = self * Vec4::new(point.x, point.y, point.z, 1.0);
        Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(utils::lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(utils::lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(utils::lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_aabb2_dimensions_and_center() {
        let bounds = Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(1600.0, 800.0));
        assert_relative_eq!(bounds.dimensions().x, 1600.0);
        assert_relative_eq!(bounds.dimensions().y, 800.0);
        assert_relative_eq!(bounds.center().x, 800.0);
        assert_relative_eq!(bounds.center().y, 400.0);
    }

    #[test]
    fn test_transform_point_translation() {
        let translation = Mat4::new_translation(&Vec3::new(1.0, 2.0, 3.0));
        let moved = translation.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved.x, 2.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 3.0);
    }
}
