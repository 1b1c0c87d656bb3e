/// Errors that can occur while loading a sphere mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// I/O error reading the mesh file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token could not be read as the expected kind of number.
    #[error("parse error on line {line}: expected {expected}, found {token:?}")]
    Parse {
        line: usize,
        expected: &'static str,
        token: String,
    },

    /// The file ended before every declared triangle was read.
    #[error("truncated mesh: header declares {declared} triangles, file holds {complete}")]
    Truncated { declared: usize, complete: usize },

    /// Well-formed input that cannot be used (empty mesh, non-finite points).
    #[error("validation error: {0}")]
    Validation(String),
}
