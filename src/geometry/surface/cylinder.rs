use crate::math::{Point3, Vector3};

/// A cylindrical surface patch.
///
/// Describes the analytic cylinder a run of faces was sampled from:
/// a point on the axis, the axis direction, and the radius. Equality is
/// exact on all components.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSurface {
    /// A point on the cylinder axis.
    pub center: Point3,
    /// Axis direction.
    pub axis: Vector3,
    /// Radius of the cylinder.
    pub radius: f64,
}

impl CylinderSurface {
    /// Creates a new cylindrical surface descriptor.
    #[must_use]
    pub fn new(center: Point3, axis: Vector3, radius: f64) -> Self {
        Self {
            center,
            axis,
            radius,
        }
    }
}
