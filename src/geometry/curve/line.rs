/// A straight edge between two mesh vertices.
///
/// The generic/default curve variant: carries nothing beyond its
/// endpoint vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCurve {
    /// Start vertex index.
    pub start: u32,
    /// End vertex index.
    pub end: u32,
}

impl LineCurve {
    /// Creates a new line curve between two vertex indices.
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Swaps the endpoints.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}
