use std::collections::HashMap;

use crate::math::Point3;

/// Deduplicating index of 3D points.
///
/// Assigns each distinct point a stable, zero-based `u32` index the first
/// time it is seen; every later lookup of an equal point returns the same
/// index. Insertion order defines the final vertex array order. Identity
/// is exact value equality; there is no tolerance and no removal.
#[derive(Debug, Default)]
pub struct PointIndex {
    points: Vec<Point3>,
    index: HashMap<[u64; 3], u32>,
}

/// Bit-pattern key for exact-equality hashing. `-0.0` is normalized to
/// `0.0` so that `==`-equal points always share a key.
fn key(point: &Point3) -> [u64; 3] {
    let normalize = |c: f64| if c == 0.0 { 0.0_f64 } else { c };
    [
        normalize(point.x).to_bits(),
        normalize(point.y).to_bits(),
        normalize(point.z).to_bits(),
    ]
}

impl PointIndex {
    /// Creates a new, empty point index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a point index with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Reserves capacity for at least `additional` more distinct points.
    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
        self.index.reserve(additional);
    }

    /// Returns the index of `point`, allocating a new one on first sight.
    #[allow(clippy::cast_possible_truncation)]
    pub fn lookup(&mut self, point: &Point3) -> u32 {
        let next = self.points.len() as u32;
        match self.index.entry(key(point)) {
            std::collections::hash_map::Entry::Occupied(entry) => *entry.get(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.points.push(*point);
                next
            }
        }
    }

    /// Number of distinct points seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no point has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends all distinct points, in first-seen order, to `out`.
    pub fn copy_points(&self, out: &mut Vec<Point3>) {
        out.extend_from_slice(&self.points);
    }

    /// Consumes the index, returning the points in first-seen order.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn assigns_indices_in_first_seen_order() {
        let mut index = PointIndex::new();
        assert_eq!(index.lookup(&p(0.0, 0.0, 0.0)), 0);
        assert_eq!(index.lookup(&p(1.0, 0.0, 0.0)), 1);
        assert_eq!(index.lookup(&p(0.0, 1.0, 0.0)), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn repeated_lookup_is_stable_and_allocation_free() {
        let mut index = PointIndex::new();
        let first = index.lookup(&p(1.0, 2.0, 3.0));
        index.lookup(&p(4.0, 5.0, 6.0));
        assert_eq!(index.lookup(&p(1.0, 2.0, 3.0)), first);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn negative_zero_matches_positive_zero() {
        let mut index = PointIndex::new();
        let a = index.lookup(&p(0.0, 0.0, 0.0));
        let b = index.lookup(&p(-0.0, 0.0, -0.0));
        assert_eq!(a, b);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn copy_points_preserves_order() {
        let mut index = PointIndex::new();
        index.lookup(&p(0.0, 0.0, 1.0));
        index.lookup(&p(0.0, 1.0, 0.0));
        index.lookup(&p(0.0, 0.0, 1.0));

        let mut out = Vec::new();
        index.copy_points(&mut out);
        assert_eq!(out, vec![p(0.0, 0.0, 1.0), p(0.0, 1.0, 0.0)]);
    }
}
