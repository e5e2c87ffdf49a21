//! RGBA color type with channel-wise interpolation
//!
//! Colors are stored as normalized f32 channels so they can be written
//! straight into vertex streams and shader tint uniforms.

use super::math::utils;

/// Normalized RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel in [0, 1]
    pub r: f32,
    /// Green channel in [0, 1]
    pub g: f32,
    /// Blue channel in [0, 1]
    pub b: f32,
    /// Alpha channel in [0, 1]
    pub a: f32,
}

impl Rgba {
    /// Opaque white
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Opaque black
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque red
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque green
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };

    /// Opaque blue
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };

    /// Opaque yellow
    pub const YELLOW: Self = Self { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };

    /// 50% gray at 50% alpha, the x-ray occluded-pass tint
    pub const XRAY_GRAY: Self = Self { r: 0.5, g: 0.5, b: 0.5, a: 0.5 };

    /// Create a color from normalized channels
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channel-wise linear interpolation between two colors
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            r: utils::lerp(from.r, to.r, t),
            g: utils::lerp(from.g, to.g, t),
            b: utils::lerp(from.b, to.b, t),
            a: utils::lerp(from.a, to.a, t),
        }
    }

    /// Channel array in RGBA order, the vertex-stream layout
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Start/end color pair interpolated over an object's lifetime
///
/// `start` applies at full remaining lifetime, `end` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFade {
    /// Color at spawn (full remaining lifetime)
    pub start: Rgba,
    /// Color at expiry (zero remaining lifetime)
    pub end: Rgba,
}

impl ColorFade {
    /// Create a fade from start to end color
    pub fn new(start: Rgba, end: Rgba) -> Self {
        Self { start, end }
    }

    /// A fade that holds one color for the whole lifetime
    pub fn constant(color: Rgba) -> Self {
        Self { start: color, end: color }
    }
}
