//! General-axis rotation and normal matrix derivation.

use glam::{Mat3, Mat4, Vec3};

/// Determinants below this are treated as singular by [`normal_matrix`].
const SINGULAR_EPSILON: f32 = 1e-12;

/// Rotation of `angle_degrees` about the axis `(x, y, z)`.
///
/// The axis does not need to be unit length. A zero (or non-finite) axis
/// yields the identity, which is what a stationary sphere needs: no
/// displacement means no roll.
pub fn rotate(angle_degrees: f32, x: f32, y: f32, z: f32) -> Mat4 {
    match Vec3::new(x, y, z).try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, angle_degrees.to_radians()),
        None => Mat4::IDENTITY,
    }
}

/// Normal matrix for a model-view transform.
///
/// With `rescale` set this is the inverse-transpose of the upper-left 3x3,
/// which keeps normals perpendicular under non-uniform scaling. Without it
/// the upper-left 3x3 is returned as-is (exact for rotations and uniform
/// scale, and cheaper). A singular upper 3x3, such as the flattened shadow
/// transform, falls back to the plain 3x3.
pub fn normal_matrix(model_view: &Mat4, rescale: bool) -> Mat3 {
    let upper = Mat3::from_mat4(*model_view);
    if !rescale {
        return upper;
    }
    if libm::fabsf(upper.determinant()) <= SINGULAR_EPSILON {
        return upper;
    }
    upper.inverse().transpose()
}
