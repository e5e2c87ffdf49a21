//! Camera abstractions for the world and screen passes
//!
//! A camera is position + orientation + projection. View space is
//! right-handed Y-up; projections map depth to [0, 1]. Matrices are computed
//! on demand rather than cached.

use crate::foundation::math::{Mat4, Mat4Ext, utils, Vec3};

/// Projection parameters for a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection for world rendering
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
        /// Width / height of the viewport
        aspect: f32,
        /// Near clipping plane distance
        near: f32,
        /// Far clipping plane distance
        far: f32,
    },

    /// Orthographic projection for screen-space rendering
    Orthographic {
        /// Full vertical extent of the view volume
        height: f32,
        /// Width / height of the viewport
        aspect: f32,
        /// Near clipping plane distance
        near: f32,
        /// Far clipping plane distance
        far: f32,
    },
}

/// Orthonormal camera orientation basis in world space
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    /// Camera-right direction
    pub right: Vec3,

    /// Camera-up direction
    pub up: Vec3,

    /// View direction (from camera toward target)
    pub forward: Vec3,
}

/// Camera with position, look-at orientation, and projection
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    projection: Projection,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Width / height of the viewport
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            projection: Projection::Perspective {
                fov_y: utils::deg_to_rad(fov_degrees),
                aspect,
                near,
                far,
            },
        }
    }

    /// Create an orthographic camera for screen-space rendering
    ///
    /// The view volume is centered on the origin: geometry is laid out in
    /// `[-height*aspect/2, height*aspect/2] x [-height/2, height/2]` at z = 0,
    /// with the camera looking down +Z.
    pub fn orthographic(height: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -1.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            projection: Projection::Orthographic { height, aspect, near, far },
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("camera position updated to {:?}", position);
    }

    /// Point the camera at a target with the given up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
    }

    /// Projection parameters
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Width / height of the viewport this camera projects into
    pub fn aspect(&self) -> f32 {
        match self.projection {
            Projection::Perspective { aspect, .. } | Projection::Orthographic { aspect, .. } => {
                aspect
            }
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y, aspect, near, far } => {
                Mat4::perspective(fov_y, aspect, near, far)
            }
            Projection::Orthographic { height, aspect, near, far } => {
                Mat4::orthographic_centered(height, aspect, near, far)
            }
        }
    }

    /// Orthonormal orientation basis in world space
    ///
    /// Derived the same way as the view matrix so billboards built from this
    /// basis align exactly with what the camera sees.
    pub fn basis(&self) -> CameraBasis {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(&self.up).normalize();
        let up = right.cross(&forward);
        CameraBasis { right, up, forward }
    }

    /// Camera-to-world matrix: orientation basis columns plus position
    pub fn world_matrix(&self) -> Mat4 {
        let CameraBasis { right, up, forward } = self.basis();
        Mat4::new(
            right.x, up.x, forward.x, self.position.x,
            right.y, up.y, forward.y, self.position.y,
            right.z, up.z, forward.z, self.position.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}
