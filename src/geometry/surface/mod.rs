mod cylinder;
mod plane;

pub use cylinder::CylinderSurface;
pub use plane::PlaneSurface;

use crate::math::{Point3, Vector3};

/// An auxiliary surface descriptor attached to a set of mesh faces.
///
/// Surfaces are metadata naming the analytic shape a run of faces was
/// sampled from; they do not participate in face indexing. The kind set
/// is closed; `Plane` doubles as the generic/default variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Planar patch (generic/default variant).
    Plane(PlaneSurface),
    /// Cylindrical patch.
    Cylinder(CylinderSurface),
}

impl Surface {
    /// Anchor point of the surface: the plane origin or a point on the
    /// cylinder axis.
    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        match self {
            Surface::Plane(plane) => &plane.origin,
            Surface::Cylinder(cylinder) => &cylinder.center,
        }
    }

    /// Characteristic direction: the plane normal or the cylinder axis.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        match self {
            Surface::Plane(plane) => &plane.normal,
            Surface::Cylinder(cylinder) => &cylinder.axis,
        }
    }

    /// Two-tier semantic equality.
    ///
    /// Same-variant pairs compare with the variant's structural equality;
    /// mixed-variant pairs fall back to comparing anchor and axis only.
    #[must_use]
    pub fn matches(&self, other: &Surface) -> bool {
        match (self, other) {
            (Surface::Plane(a), Surface::Plane(b)) => a == b,
            (Surface::Cylinder(a), Surface::Cylinder(b)) => a == b,
            _ => self.anchor() == other.anchor() && self.axis() == other.axis(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn cylinder(radius: f64) -> Surface {
        Surface::Cylinder(CylinderSurface::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), radius))
    }

    #[test]
    fn same_variant_uses_structural_equality() {
        assert!(cylinder(2.0).matches(&cylinder(2.0)));
        // Same axis, different radius: not the same cylinder.
        assert!(!cylinder(2.0).matches(&cylinder(3.0)));
    }

    #[test]
    fn mixed_variants_fall_back_to_anchor_and_axis() {
        let plane = Surface::Plane(PlaneSurface::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)));
        assert!(plane.matches(&cylinder(2.0)));

        let offset = Surface::Plane(PlaneSurface::new(p(1.0, 0.0, 0.0), v(0.0, 0.0, 1.0)));
        assert!(!offset.matches(&cylinder(2.0)));
    }
}
