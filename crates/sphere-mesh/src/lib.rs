/// Error types for mesh loading.
pub mod error;

/// Whitespace-delimited mesh format parser.
pub mod parser;

/// Owned mesh buffers.
pub mod types;

pub use error::MeshError;
pub use parser::parse_str;
pub use types::SphereMesh;

use std::fs;
use std::path::Path;

/// Load a sphere mesh file.
///
/// The whole file is validated before anything is returned; callers never
/// see a partially read mesh.
pub fn load(path: &Path) -> Result<SphereMesh, MeshError> {
    log::info!("Loading mesh: {}", path.display());
    let text = fs::read_to_string(path)?;
    let mesh = parser::parse_str(&text)?;
    log::info!(
        "  {} triangles, bounding radius {:.3}",
        mesh.triangle_count(),
        mesh.bounding_radius()
    );
    Ok(mesh)
}
