use crate::math::{Point3, Vector3};

/// A circular-arc edge between two mesh vertices.
///
/// Describes the analytic circle an edge was sampled from: center,
/// plane normal, and radius, plus the endpoint vertex indices. Equality
/// is exact on all components.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCurve {
    /// Center of the arc circle.
    pub center: Point3,
    /// Normal of the arc plane; its sign encodes traversal direction.
    pub normal: Vector3,
    /// Radius of the arc circle.
    pub radius: f64,
    /// Start vertex index.
    pub start: u32,
    /// End vertex index.
    pub end: u32,
}

impl ArcCurve {
    /// Creates a new arc curve.
    #[must_use]
    pub fn new(center: Point3, normal: Vector3, radius: f64, start: u32, end: u32) -> Self {
        Self {
            center,
            normal,
            radius,
            start,
            end,
        }
    }

    /// Swaps the endpoints and flips the plane normal, so the arc sweeps
    /// the same set of points in the opposite direction.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.normal = -self.normal;
    }
}
