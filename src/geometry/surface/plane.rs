use crate::math::{Point3, Vector3};

/// A planar surface patch.
///
/// The generic/default surface variant: an origin point and a normal.
/// Equality is exact on all components.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneSurface {
    /// A point on the plane.
    pub origin: Point3,
    /// Plane normal.
    pub normal: Vector3,
}

impl PlaneSurface {
    /// Creates a new planar surface descriptor.
    #[must_use]
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self { origin, normal }
    }
}
