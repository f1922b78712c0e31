use crate::error::MeshError;
use crate::geometry::curve::Curve;
use crate::geometry::surface::Surface;
use crate::math::Point3;

/// A single polygon face, stored as an ordered loop of vertex indices.
///
/// Valid faces hold at least three indices, with no two consecutive
/// entries equal and the last entry different from the first.
pub type IndexedFace = Vec<u32>;

/// Spatial dimension of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// Planar geometry embedded in the XY plane.
    Two,
    /// Full 3D geometry.
    #[default]
    Three,
}

/// An RGBA color with exact component equality.
///
/// Palette membership is decided by `==` on all four components, so two
/// colors that differ in any bit are distinct palette entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a new color from RGBA components.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// An immutable indexed polygon mesh.
///
/// Produced exactly once by [`crate::builder::MeshBuilder::build`]; all
/// accumulated containers are moved into the snapshot, which is read-only
/// from then on. Face colors are optional: `face_colors()` is either empty
/// (no face ever carried a color) or exactly as long as `faces()`, with
/// `None` marking uncolored faces.
#[derive(Debug, Clone)]
pub struct PolyMesh {
    vertices: Vec<Point3>,
    faces: Vec<IndexedFace>,
    colors: Vec<Color>,
    face_colors: Vec<Option<u32>>,
    curves: Vec<Curve>,
    surfaces: Vec<Surface>,
    dim: Dimension,
    convex: Option<bool>,
    convexity: u32,
    triangular: bool,
}

impl PolyMesh {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        vertices: Vec<Point3>,
        faces: Vec<IndexedFace>,
        colors: Vec<Color>,
        face_colors: Vec<Option<u32>>,
        curves: Vec<Curve>,
        surfaces: Vec<Surface>,
        dim: Dimension,
        convex: Option<bool>,
        convexity: u32,
        triangular: bool,
    ) -> Self {
        Self {
            vertices,
            faces,
            colors,
            face_colors,
            curves,
            surfaces,
            dim,
            convex,
            convexity,
            triangular,
        }
    }

    /// Vertex positions, in first-seen order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Polygon faces, each an ordered loop of vertex indices.
    #[must_use]
    pub fn faces(&self) -> &[IndexedFace] {
        &self.faces
    }

    /// Unique colors referenced by faces, in first-seen order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Per-face palette indices; empty if no face ever carried a color.
    #[must_use]
    pub fn face_colors(&self) -> &[Option<u32>] {
        &self.face_colors
    }

    /// Auxiliary curve descriptors attached to the mesh.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Auxiliary surface descriptors attached to the mesh.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Spatial dimension tag.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Convexity hint: `Some(true)` convex, `Some(false)` non-convex,
    /// `None` unknown.
    #[must_use]
    pub fn convex(&self) -> Option<bool> {
        self.convex
    }

    /// Upper bound on the number of front/back facet alternations, used by
    /// downstream consumers for visibility and intersection heuristics.
    #[must_use]
    pub fn convexity(&self) -> u32 {
        self.convexity
    }

    /// `true` iff every face has exactly three vertices.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.triangular
    }

    /// `true` if the mesh has neither vertices nor faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// `true` if the mesh carries per-face color attribution.
    #[must_use]
    pub fn has_face_colors(&self) -> bool {
        !self.face_colors.is_empty()
    }

    /// Checks internal index consistency.
    ///
    /// Verifies that every face index points at an existing vertex, that
    /// the face-color array is either empty or exactly one entry per face,
    /// and that every face-color entry points at an existing palette color.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (fi, face) in self.faces.iter().enumerate() {
            for &vi in face {
                if vi as usize >= self.vertices.len() {
                    return Err(MeshError::VertexIndexOutOfBounds {
                        face: fi,
                        vertex: vi,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }

        if !self.face_colors.is_empty() && self.face_colors.len() != self.faces.len() {
            return Err(MeshError::FaceColorCountMismatch {
                entries: self.face_colors.len(),
                faces: self.faces.len(),
            });
        }

        for (fi, entry) in self.face_colors.iter().enumerate() {
            if let Some(ci) = entry {
                if *ci as usize >= self.colors.len() {
                    return Err(MeshError::ColorIndexOutOfBounds {
                        face: fi,
                        color: *ci,
                        color_count: self.colors.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn mesh(
        vertices: Vec<Point3>,
        faces: Vec<IndexedFace>,
        colors: Vec<Color>,
        face_colors: Vec<Option<u32>>,
    ) -> PolyMesh {
        PolyMesh::from_parts(
            vertices,
            faces,
            colors,
            face_colors,
            Vec::new(),
            Vec::new(),
            Dimension::Three,
            None,
            1,
            true,
        )
    }

    fn triangle_vertices() -> Vec<Point3> {
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]
    }

    // ── validate ──

    #[test]
    fn validate_accepts_consistent_mesh() {
        let m = mesh(
            triangle_vertices(),
            vec![vec![0, 1, 2]],
            vec![Color::rgb(1.0, 0.0, 0.0)],
            vec![Some(0)],
        );
        assert!(m.validate().is_ok());
    }

    #[test]
    fn validate_rejects_vertex_index_out_of_bounds() {
        let m = mesh(triangle_vertices(), vec![vec![0, 1, 3]], Vec::new(), Vec::new());
        assert!(matches!(
            m.validate(),
            Err(MeshError::VertexIndexOutOfBounds { face: 0, vertex: 3, .. })
        ));
    }

    #[test]
    fn validate_rejects_face_color_count_mismatch() {
        let m = mesh(
            triangle_vertices(),
            vec![vec![0, 1, 2], vec![2, 1, 0]],
            vec![Color::rgb(0.0, 1.0, 0.0)],
            vec![Some(0)],
        );
        assert!(matches!(
            m.validate(),
            Err(MeshError::FaceColorCountMismatch { entries: 1, faces: 2 })
        ));
    }

    #[test]
    fn validate_rejects_color_index_out_of_bounds() {
        let m = mesh(
            triangle_vertices(),
            vec![vec![0, 1, 2]],
            Vec::new(),
            vec![Some(0)],
        );
        assert!(matches!(
            m.validate(),
            Err(MeshError::ColorIndexOutOfBounds { face: 0, color: 0, .. })
        ));
    }

    // ── color equality ──

    #[test]
    fn color_equality_is_exact() {
        assert_eq!(Color::rgb(0.5, 0.5, 0.5), Color::new(0.5, 0.5, 0.5, 1.0));
        assert_ne!(Color::rgb(0.5, 0.5, 0.5), Color::rgb(0.5, 0.5, 0.500_001));
    }
}
