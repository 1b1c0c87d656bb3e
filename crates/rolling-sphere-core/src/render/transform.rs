//! Camera, model and viewport transforms.

use glam::{Mat3, Mat4, Vec3, Vec4, Vec4Swizzles};

/// Perspective projection with OpenGL clip conventions (depth -1..1).
///
/// `fovy_degrees` is the vertical field of view.
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far)
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Sphere model transform: `translate(position) * scale * orientation`.
pub fn sphere_model(position: Vec3, scale: f32, orientation: &Mat4) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(scale)) * *orientation
}

/// Output window in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// A clip-space point after the perspective divide, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowPoint {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
    /// Depth-range value, 0 at the near plane and 1 at the far plane.
    pub depth: f32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height counts as 1.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Map a clip-space position into the window.
    ///
    /// Points at or behind the eye (`w <= 0`) have no window position.
    pub fn to_window(&self, clip: Vec4) -> Option<WindowPoint> {
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(WindowPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width as f32,
            y: (1.0 - ndc.y) * 0.5 * self.height as f32,
            depth: (ndc.z + 1.0) * 0.5,
        })
    }
}

/// Transform a normal by a normal matrix and renormalize it.
pub fn transform_normal(normal: Vec3, normal_matrix: &Mat3) -> Vec3 {
    (*normal_matrix * normal).normalize_or_zero()
}
