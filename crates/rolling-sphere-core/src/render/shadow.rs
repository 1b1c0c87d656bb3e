//! Planar shadow projection onto the floor (y = 0).

use glam::{Mat4, Vec3, Vec4};

/// Projection that flattens geometry onto `y = 0` as seen from a point light.
///
/// Column-major layout:
///
/// ```text
/// col0 = ( Ly,   0,   0,  0)
/// col1 = (-Lx,   0, -Lz, -1)
/// col2 = (  0,   0,  Ly,  0)
/// col3 = (  0,   0,   0, Ly)
/// ```
///
/// The light never moves, so this is built once and reused for every frame.
pub fn shadow_projection(light: Vec3) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(light.y, 0.0, 0.0, 0.0),
        Vec4::new(-light.x, 0.0, -light.z, -1.0),
        Vec4::new(0.0, 0.0, light.y, 0.0),
        Vec4::new(0.0, 0.0, 0.0, light.y),
    )
}

/// `view * shadow * sphere_model`: sphere vertices land on the floor, then
/// go through the camera.
pub fn shadow_model_view(view: &Mat4, shadow: &Mat4, sphere_model: &Mat4) -> Mat4 {
    *view * *shadow * *sphere_model
}

/// Shadows are only drawn while the camera is above the floor.
pub fn visible_from(eye: Vec3) -> bool {
    eye.y >= 0.0
}
