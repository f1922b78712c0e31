use std::fmt;
use std::sync::Arc;

use crate::error::ConvertError;
use crate::mesh::PolyMesh;

use super::polygon_2d::Polygon2d;

/// Conversion contract for boundary-representation solids.
///
/// Implementors turn a solid (e.g. a Nef-polyhedron-like structure) into
/// an indexed mesh. Conversion may fail; the mesh builder logs the error
/// and skips the solid, leaving the accumulated mesh unaffected.
pub trait BrepGeometry: fmt::Debug {
    /// Converts the solid to an indexed mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be converted.
    fn to_mesh(&self) -> Result<PolyMesh, ConvertError>;
}

/// Conversion contract for manifold (watertight) mesh representations.
///
/// Unlike boundary-representation conversion, this is total: a manifold
/// mesh always has an indexed-face form.
pub trait ManifoldGeometry: fmt::Debug {
    /// Converts the manifold mesh to an indexed mesh.
    fn to_mesh(&self) -> PolyMesh;
}

/// A named collection of child geometry values.
///
/// Children are visited in their stored order when the collection is
/// appended to a builder.
#[derive(Debug, Clone, Default)]
pub struct GeometryGroup {
    /// Named children, visited in order.
    pub children: Vec<(String, Arc<Geometry>)>,
}

impl GeometryGroup {
    /// Creates a group from named children.
    #[must_use]
    pub fn new(children: Vec<(String, Arc<Geometry>)>) -> Self {
        Self { children }
    }
}

/// A heterogeneous geometry value, as produced by solid-modeling
/// operations.
///
/// This is a closed kind set: the mesh builder knows how to flatten every
/// variant except [`Geometry::Shape2d`], which is a caller contract
/// violation when passed to
/// [`crate::builder::MeshBuilder::append_geometry`]. Values are shared
/// read-only via [`Arc`]; the builder copies point and color data out and
/// never retains a reference into them.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// A named collection of child geometries.
    Group(GeometryGroup),
    /// A ready-made indexed mesh.
    Mesh(Arc<PolyMesh>),
    /// A boundary-representation solid requiring (fallible) conversion.
    Brep(Arc<dyn BrepGeometry + Send + Sync>),
    /// A manifold mesh requiring (total) conversion.
    Manifold(Arc<dyn ManifoldGeometry + Send + Sync>),
    /// A 2D-only shape; not convertible to mesh faces.
    Shape2d(Arc<Polygon2d>),
}
