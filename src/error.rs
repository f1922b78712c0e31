use thiserror::Error;

/// Top-level error type for the Polyweld mesh kernel.
#[derive(Debug, Error)]
pub enum PolyweldError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors reported by geometry conversion collaborators.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("boundary representation conversion failed: {0}")]
    BrepConversion(String),
}

/// Mesh consistency violations detected by [`crate::mesh::PolyMesh::validate`].
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("face {face} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfBounds {
        face: usize,
        vertex: u32,
        vertex_count: usize,
    },

    #[error("face {face} references color {color}, but the palette has {color_count} colors")]
    ColorIndexOutOfBounds {
        face: usize,
        color: u32,
        color_count: usize,
    },

    #[error("face color array has {entries} entries for {faces} faces")]
    FaceColorCountMismatch { entries: usize, faces: usize },
}

/// Convenience type alias for results using [`PolyweldError`].
pub type Result<T> = std::result::Result<T, PolyweldError>;
