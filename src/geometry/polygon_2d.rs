use crate::math::Point2;

/// A 2D polygon with zero or more closed outlines.
///
/// Outlines after the first are holes or additional islands; each outline
/// is an implicitly closed loop of 2D points. `Polygon2d` is a 2D-only
/// geometry kind: it cannot contribute faces to a mesh and must be
/// extruded or otherwise lifted to 3D before reaching the mesh builder.
#[derive(Debug, Clone, Default)]
pub struct Polygon2d {
    /// Closed outlines, each an ordered loop of 2D points.
    pub outlines: Vec<Vec<Point2>>,
}

impl Polygon2d {
    /// Creates a polygon from a set of closed outlines.
    #[must_use]
    pub fn new(outlines: Vec<Vec<Point2>>) -> Self {
        Self { outlines }
    }
}
