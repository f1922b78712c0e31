pub mod palette;
pub mod point_index;
pub mod registry;

pub use palette::ColorPalette;
pub use point_index::PointIndex;
pub use registry::DescriptorRegistry;

use crate::geometry::compose::Geometry;
use crate::geometry::curve::Curve;
use crate::geometry::surface::Surface;
use crate::math::{Point3, Point3f};
use crate::mesh::{Color, Dimension, IndexedFace, PolyMesh};

/// Staging structure that incrementally assembles a [`PolyMesh`].
///
/// The builder merges geometry of unrelated origin into one consistent
/// indexed mesh: points are welded by exact equality, per-face colors are
/// kept in a deduplicated palette, and spurious consecutive or closing
/// duplicate vertex references are dropped as faces are assembled. Faces
/// that collapse below three vertices are discarded silently; that is a
/// normal byproduct of welding, not an error.
///
/// A builder is mutated by exactly one owner and consumed once by
/// [`MeshBuilder::build`], which moves all accumulated state into the
/// immutable output mesh.
#[derive(Debug)]
pub struct MeshBuilder {
    points: PointIndex,
    faces: Vec<IndexedFace>,
    palette: ColorPalette,
    registry: DescriptorRegistry,
    current_face: IndexedFace,
    dim: Dimension,
    convex: Option<bool>,
    convexity: u32,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new(Dimension::Three, None)
    }
}

impl MeshBuilder {
    /// Creates a builder for a mesh with the given dimension tag and
    /// convexity hint (`None` = unknown).
    #[must_use]
    pub fn new(dim: Dimension, convex: Option<bool>) -> Self {
        Self {
            points: PointIndex::new(),
            faces: Vec::new(),
            palette: ColorPalette::new(),
            registry: DescriptorRegistry::new(),
            current_face: IndexedFace::new(),
            dim,
            convex,
            convexity: 1,
        }
    }

    /// Creates a builder with reservation hints for the expected vertex
    /// and face counts.
    #[must_use]
    pub fn with_capacity(
        dim: Dimension,
        convex: Option<bool>,
        vertices: usize,
        faces: usize,
    ) -> Self {
        let mut builder = Self::new(dim, convex);
        builder.reserve(vertices, faces);
        builder
    }

    /// Reserves storage for at least `vertices` more distinct points and
    /// `faces` more faces.
    pub fn reserve(&mut self, vertices: usize, faces: usize) {
        if vertices != 0 {
            self.points.reserve(vertices);
        }
        if faces != 0 {
            self.faces.reserve(faces);
        }
    }

    /// Sets the numeric convexity carried into the output mesh.
    pub fn set_convexity(&mut self, convexity: u32) {
        self.convexity = convexity;
    }

    /// Returns the welded index of `point`, allocating one on first sight.
    pub fn vertex_index(&mut self, point: &Point3) -> u32 {
        self.points.lookup(point)
    }

    /// Number of distinct points seen so far.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    /// Number of committed faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// `true` if no point has been seen and no face committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.faces.is_empty()
    }

    /// Appends all distinct points, in first-seen order, to `out`.
    pub fn copy_vertices(&self, out: &mut Vec<Point3>) {
        self.points.copy_points(out);
    }

    /// Single-precision variant of [`MeshBuilder::copy_vertices`], for
    /// render/export interchange.
    #[allow(clippy::cast_possible_truncation)]
    pub fn copy_vertices_f32(&self, out: &mut Vec<Point3f>) {
        let mut vertices = Vec::with_capacity(self.points.len());
        self.points.copy_points(&mut vertices);
        out.reserve(vertices.len());
        out.extend(
            vertices
                .iter()
                .map(|p| Point3f::new(p.x as f32, p.y as f32, p.z as f32)),
        );
    }

    // ── face assembly ──

    /// Starts a new face, committing any pending one (without color), and
    /// reserves storage for its expected vertex count.
    pub fn begin_face(&mut self, expected_vertices: usize) {
        self.end_face();
        self.current_face.reserve(expected_vertices);
    }

    /// Appends a vertex index to the face under construction.
    ///
    /// The index is dropped if it equals the face's last entry (trivial
    /// consecutive duplicate) or its first entry (closing wrap duplicate).
    pub fn add_vertex(&mut self, index: u32) {
        if self.current_face.first() != Some(&index) && self.current_face.last() != Some(&index) {
            self.current_face.push(index);
        }
    }

    /// Resolves `point` through the point index and appends the resulting
    /// vertex index to the face under construction.
    pub fn add_vertex_point(&mut self, point: &Point3) {
        let index = self.points.lookup(point);
        self.add_vertex(index);
    }

    /// Commits the face under construction without a color.
    ///
    /// Faces with fewer than three vertices are discarded. Once the
    /// face-color array has started, a committed uncolored face appends a
    /// sentinel entry so the array stays one entry per face.
    pub fn end_face(&mut self) {
        self.finish_face(None);
    }

    /// Commits the face under construction with a color.
    ///
    /// The color is resolved against the palette only if the face actually
    /// commits; a discarded degenerate face adds nothing to the palette.
    /// The first colored commit starts the face-color array, backfilled
    /// with sentinels for all previously committed faces.
    pub fn end_face_colored(&mut self, color: Color) {
        if self.current_face.len() >= 3 {
            let entry = Some(self.palette.lookup(color));
            self.finish_face(entry);
        } else {
            self.current_face.clear();
        }
    }

    fn finish_face(&mut self, entry: Option<u32>) {
        if self.current_face.len() >= 3 {
            let faces_before = self.faces.len();
            self.faces.push(std::mem::take(&mut self.current_face));
            self.palette.record(faces_before, entry);
        } else {
            self.current_face.clear();
        }
    }

    /// Appends a whole face given as vertex indices.
    pub fn append_face(&mut self, indices: &[u32]) {
        self.begin_face(indices.len());
        for &index in indices {
            self.add_vertex(index);
        }
        self.end_face();
    }

    /// Appends a whole face given as points, welding each through the
    /// point index.
    pub fn append_face_points(&mut self, points: &[Point3]) {
        self.begin_face(points.len());
        for point in points {
            self.add_vertex_point(point);
        }
        self.end_face();
    }

    // ── descriptor registry ──

    /// Adds an auxiliary curve descriptor, deduplicated after orientation
    /// canonicalization.
    pub fn add_curve(&mut self, curve: Curve) {
        self.registry.add_curve(curve);
    }

    /// Adds an auxiliary surface descriptor, deduplicated.
    pub fn add_surface(&mut self, surface: Surface) {
        self.registry.add_surface(surface);
    }

    // ── geometry composition ──

    /// Recursively flattens `geometry` into this builder.
    ///
    /// Groups are visited child by child in their stored order; ready-made
    /// meshes merge via [`MeshBuilder::append_mesh`];
    /// boundary-representation solids and manifold meshes are converted
    /// through their capability traits first. A failed
    /// boundary-representation conversion is logged and skipped, leaving
    /// the accumulated mesh unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `geometry` is a 2D-only shape. That is a caller contract
    /// violation: 2D shapes have no defined conversion to mesh faces and
    /// must never reach the builder.
    pub fn append_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Group(group) => {
                for (_, child) in &group.children {
                    self.append_geometry(child);
                }
            }
            Geometry::Mesh(mesh) => self.append_mesh(mesh),
            Geometry::Brep(solid) => match solid.to_mesh() {
                Ok(mesh) => self.append_mesh(&mesh),
                Err(err) => {
                    tracing::error!("skipping boundary representation solid: {err}");
                }
            },
            Geometry::Manifold(manifold) => self.append_mesh(&manifold.to_mesh()),
            Geometry::Shape2d(_) => panic!("2D shape passed to mesh builder"),
        }
    }

    /// Merges another indexed mesh into this builder.
    ///
    /// Every source face is replayed through the face assembler with its
    /// points resolved through the point index, so vertices shared between
    /// source and destination weld to one index. Color attribution is
    /// preserved across independent palettes: source palette indices are
    /// translated through a one-time table (reusing equal colors,
    /// appending novel ones), and each committed face records its
    /// translated entry — or a sentinel, once either side has started
    /// color tracking.
    pub fn append_mesh(&mut self, mesh: &PolyMesh) {
        let translated: Option<Vec<Option<u32>>> = if mesh.has_face_colors() {
            self.palette.ensure_started(self.faces.len());
            let color_map: Vec<u32> = mesh
                .colors()
                .iter()
                .map(|color| self.palette.lookup(*color))
                .collect();
            Some(
                mesh.face_colors()
                    .iter()
                    .map(|entry| entry.map(|i| color_map[i as usize]))
                    .collect(),
            )
        } else {
            None
        };

        self.reserve(mesh.vertices().len(), mesh.faces().len());
        self.palette.reserve_entries(mesh.faces().len());

        for (fi, face) in mesh.faces().iter().enumerate() {
            self.begin_face(face.len());
            for &index in face {
                self.add_vertex_point(&mesh.vertices()[index as usize]);
            }
            let entry = translated.as_ref().and_then(|t| t[fi]);
            self.finish_face(entry);
        }
    }

    // ── finalization ──

    /// Consumes the builder, freezing all accumulated state into an
    /// immutable [`PolyMesh`].
    ///
    /// Any pending face is committed (without color) first. The
    /// all-triangular flag is computed by scanning every stored face.
    #[must_use]
    pub fn build(mut self) -> PolyMesh {
        self.end_face();
        let triangular = self.faces.iter().all(|face| face.len() <= 3);
        let (colors, face_colors) = self.palette.into_parts();
        let (curves, surfaces) = self.registry.into_parts();
        PolyMesh::from_parts(
            self.points.into_points(),
            self.faces,
            colors,
            face_colors,
            curves,
            surfaces,
            self.dim,
            self.convex,
            self.convexity,
            triangular,
        )
    }
}
