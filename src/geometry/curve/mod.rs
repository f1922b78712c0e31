mod arc;
mod line;

pub use arc::ArcCurve;
pub use line::LineCurve;

/// An auxiliary curve descriptor attached to a mesh edge.
///
/// Curves are metadata: they name the analytic shape an edge was sampled
/// from, identified by its endpoint vertex indices. They do not
/// participate in face indexing. The kind set is closed; `Line` doubles
/// as the generic/default variant for edges with no richer description.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Straight edge between two vertices (generic/default variant).
    Line(LineCurve),
    /// Circular-arc edge.
    Arc(ArcCurve),
}

impl Curve {
    /// Endpoint vertex indices, in stored order.
    #[must_use]
    pub fn endpoints(&self) -> (u32, u32) {
        match self {
            Curve::Line(line) => (line.start, line.end),
            Curve::Arc(arc) => (arc.start, arc.end),
        }
    }

    /// Reverses the traversal direction, swapping the endpoints.
    pub fn reverse(&mut self) {
        match self {
            Curve::Line(line) => line.reverse(),
            Curve::Arc(arc) => arc.reverse(),
        }
    }

    /// Puts the curve into canonical orientation: lower endpoint first.
    pub fn canonicalize(&mut self) {
        let (start, end) = self.endpoints();
        if start > end {
            self.reverse();
        }
    }

    /// Two-tier semantic equality.
    ///
    /// Same-variant pairs compare with the variant's structural equality;
    /// mixed-variant pairs fall back to comparing endpoints only. Both
    /// sides are expected to be in canonical orientation.
    #[must_use]
    pub fn matches(&self, other: &Curve) -> bool {
        match (self, other) {
            (Curve::Line(a), Curve::Line(b)) => a == b,
            (Curve::Arc(a), Curve::Arc(b)) => a == b,
            _ => self.endpoints() == other.endpoints(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};

    fn arc(start: u32, end: u32) -> Curve {
        Curve::Arc(ArcCurve::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            2.0,
            start,
            end,
        ))
    }

    // ── canonicalize ──

    #[test]
    fn canonicalize_reverses_descending_endpoints() {
        let mut curve = Curve::Line(LineCurve::new(5, 2));
        curve.canonicalize();
        assert_eq!(curve.endpoints(), (2, 5));
    }

    #[test]
    fn canonicalize_keeps_ascending_endpoints() {
        let mut curve = Curve::Line(LineCurve::new(2, 5));
        curve.canonicalize();
        assert_eq!(curve.endpoints(), (2, 5));
    }

    #[test]
    fn reversing_an_arc_flips_its_normal() {
        let mut curve = arc(5, 2);
        curve.canonicalize();
        let Curve::Arc(ref a) = curve else {
            panic!("variant changed");
        };
        assert_eq!(a.normal, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(curve.endpoints(), (2, 5));
    }

    // ── matches ──

    #[test]
    fn same_variant_uses_structural_equality() {
        assert!(arc(2, 5).matches(&arc(2, 5)));

        let other = Curve::Arc(ArcCurve::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            3.0,
            2,
            5,
        ));
        // Same endpoints, different radius: not the same arc.
        assert!(!arc(2, 5).matches(&other));
    }

    #[test]
    fn mixed_variants_fall_back_to_endpoint_equality() {
        let line = Curve::Line(LineCurve::new(2, 5));
        assert!(line.matches(&arc(2, 5)));
        assert!(!line.matches(&arc(2, 6)));
    }
}
