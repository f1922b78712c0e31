use crate::geometry::curve::Curve;
use crate::geometry::surface::Surface;

/// Dedup sets of auxiliary curve and surface descriptors.
///
/// Each set holds every semantically distinct descriptor exactly once, in
/// insertion order. Curves are canonicalized (lower endpoint first) before
/// comparison; surfaces have no orientation step. Both use the two-tier
/// equality of [`Curve::matches`] / [`Surface::matches`].
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    curves: Vec<Curve>,
    surfaces: Vec<Surface>,
}

impl DescriptorRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve, silently discarding it if an equal curve is present.
    pub fn add_curve(&mut self, mut curve: Curve) {
        curve.canonicalize();
        if !self.curves.iter().any(|c| c.matches(&curve)) {
            self.curves.push(curve);
        }
    }

    /// Adds a surface, silently discarding it if an equal surface is
    /// present.
    pub fn add_surface(&mut self, surface: Surface) {
        if !self.surfaces.iter().any(|s| s.matches(&surface)) {
            self.surfaces.push(surface);
        }
    }

    /// Stored curves, in insertion order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Stored surfaces, in insertion order.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Consumes the registry, returning `(curves, surfaces)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Curve>, Vec<Surface>) {
        (self.curves, self.surfaces)
    }
}
