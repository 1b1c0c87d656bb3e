//! Linear interpolation and point distance.

use glam::{Mat4, Vec3};

/// Interpolate between two points: `begin + (end - begin) * t`.
///
/// `t` is not clamped. Path motion only ever passes values in `[0, 1)`.
pub fn lerp(begin: Vec3, end: Vec3, t: f32) -> Vec3 {
    begin + (end - begin) * t
}

/// Element-wise interpolation between two matrices.
pub fn lerp_mat4(begin: &Mat4, end: &Mat4, t: f32) -> Mat4 {
    *begin + (*end - *begin) * t
}

/// Euclidean distance from `a` to `b`.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}
