//! Math utilities and types
//!
//! The UI works in integer pixel space with a top-left origin and Y pointing
//! down, the same space the windowing layer reports pointer positions in.

pub use nalgebra::{Vector2, Vector4};

/// 2D integer vector (pixel positions and sizes)
pub type Vec2i = Vector2<i32>;

/// RGBA color, each channel in `0.0..=1.0`
pub type Vec4 = Vector4<f32>;

/// Shorthand constructor for [`Vec2i`]
#[inline]
pub fn v2i(x: i32, y: i32) -> Vec2i {
    Vec2i::new(x, y)
}

/// Shorthand constructor for an RGBA color
#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Vec4 {
    Vec4::new(r, g, b, a)
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Inverse of [`lerp`]: where `value` sits between `a` and `b`, unclamped
    pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
        if (b - a).abs() <= f32::EPSILON {
            0.0
        } else {
            (value - a) / (b - a)
        }
    }
}
