use glam::Vec3;
use rolling_sphere_core::render::mesh::{smooth_normal, triangle_normal, MeshRef};

use crate::error::MeshError;

/// Triangle-list sphere mesh with both normal sets precomputed.
///
/// All three vectors have the same length, a multiple of 3. Vertex `i` of
/// triangle `t` is at index `3 * t + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub positions: Vec<Vec3>,
    /// One normal per triangle, repeated for its three vertices.
    pub flat_normals: Vec<Vec3>,
    /// Normalized position of each vertex.
    pub smooth_normals: Vec<Vec3>,
}

impl SphereMesh {
    /// Build from a triangle list, deriving flat and smooth normals.
    pub fn from_positions(positions: Vec<Vec3>) -> Result<Self, MeshError> {
        if positions.is_empty() {
            return Err(MeshError::Validation("mesh has no triangles".to_string()));
        }
        if positions.len() % 3 != 0 {
            return Err(MeshError::Validation(format!(
                "{} points do not form whole triangles",
                positions.len()
            )));
        }
        if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::Validation(format!(
                "vertex {} is not finite: {}",
                i, positions[i]
            )));
        }

        let mut flat_normals = Vec::with_capacity(positions.len());
        let mut degenerate = 0usize;
        for tri in positions.chunks_exact(3) {
            let n = triangle_normal(tri[0], tri[1], tri[2]);
            if n == Vec3::ZERO {
                degenerate += 1;
            }
            flat_normals.extend_from_slice(&[n, n, n]);
        }
        if degenerate > 0 {
            log::warn!("{} degenerate triangles have zero normals", degenerate);
        }

        let smooth_normals = positions.iter().map(|&p| smooth_normal(p)).collect();

        Ok(Self {
            positions,
            flat_normals,
            smooth_normals,
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Largest distance of any vertex from the origin.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }

    /// Borrow as the core's mesh view.
    pub fn as_mesh_ref(&self) -> MeshRef<'_> {
        MeshRef {
            positions: &self.positions,
            flat_normals: &self.flat_normals,
            smooth_normals: &self.smooth_normals,
        }
    }
}
