//! Sphere mesh view and per-vertex lighting.
//!
//! The mesh is a flat triangle list (3 points per triangle, winding order
//! significant). Storage is owned by the host; the core only borrows it.

use glam::{Mat4, Vec3, Vec4};

use crate::render::lighting::{shade, LightUniforms};
use crate::render::transform::transform_normal;
use crate::render::{DrawTransform, Shading};

/// Face normal from winding order: `normalize((p1 - p0) x (p2 - p0))`.
///
/// Degenerate triangles get a zero normal.
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}

/// Smooth normal for a point on a sphere centered at the origin.
pub fn smooth_normal(p: Vec3) -> Vec3 {
    p.normalize_or_zero()
}

/// Borrowed view of triangle-list mesh data.
#[derive(Clone, Copy, Debug)]
pub struct MeshRef<'a> {
    pub positions: &'a [Vec3],
    pub flat_normals: &'a [Vec3],
    pub smooth_normals: &'a [Vec3],
}

impl<'a> MeshRef<'a> {
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn normals(&self, shading: Shading) -> &'a [Vec3] {
        match shading {
            Shading::Flat => self.flat_normals,
            Shading::Smooth => self.smooth_normals,
        }
    }
}

/// Light every vertex of `mesh` for one frame.
///
/// `emit` receives the vertex index, its eye-frame position and its lit
/// color. Vertices without a matching normal are skipped.
pub fn shade_mesh<F>(
    mesh: &MeshRef<'_>,
    transform: &DrawTransform,
    shading: Shading,
    uniforms: &LightUniforms,
    mut emit: F,
) where
    F: FnMut(usize, Vec3, Vec4),
{
    let normals = mesh.normals(shading);
    for (i, (&position, &normal)) in mesh.positions.iter().zip(normals.iter()).enumerate() {
        let eye_position = eye_point(&transform.model_view, position);
        let eye_normal = transform_normal(normal, &transform.normal_matrix);
        emit(i, eye_position, shade(eye_position, eye_normal, uniforms));
    }
}

fn eye_point(model_view: &Mat4, p: Vec3) -> Vec3 {
    model_view.transform_point3(p)
}
