use crate::mesh::Color;

/// Deduplicating color palette with a lazily-started per-face index array.
///
/// The face-color array does not exist until the first face commits with a
/// color; at that moment it is created and backfilled with one sentinel
/// (`None`) per previously committed face. Once started, it grows by
/// exactly one entry per committed face, keeping its length equal to the
/// stored face count at all times.
#[derive(Debug, Default)]
pub struct ColorPalette {
    colors: Vec<Color>,
    face_colors: Option<Vec<Option<u32>>>,
}

impl ColorPalette {
    /// Creates a new, empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the palette index of `color`, appending it on first sight.
    #[allow(clippy::cast_possible_truncation)]
    pub fn lookup(&mut self, color: Color) -> u32 {
        if let Some(pos) = self.colors.iter().position(|c| *c == color) {
            pos as u32
        } else {
            self.colors.push(color);
            (self.colors.len() - 1) as u32
        }
    }

    /// `true` once the face-color array exists.
    #[must_use]
    pub fn started(&self) -> bool {
        self.face_colors.is_some()
    }

    /// Starts the face-color array if needed, backfilling one sentinel per
    /// already-committed face.
    pub fn ensure_started(&mut self, faces_before: usize) {
        if self.face_colors.is_none() {
            self.face_colors = Some(vec![None; faces_before]);
        }
    }

    /// Records the color entry for a face that just committed.
    ///
    /// `faces_before` is the number of faces committed before this one. A
    /// `Some` entry starts the array (backfilling sentinels) if it had not
    /// started; a `None` entry is recorded only if the array has started.
    pub fn record(&mut self, faces_before: usize, entry: Option<u32>) {
        if entry.is_some() {
            self.ensure_started(faces_before);
        }
        if let Some(face_colors) = &mut self.face_colors {
            face_colors.push(entry);
        }
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` if no color has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Reserves room for `additional` more face-color entries, if the
    /// array has started.
    pub fn reserve_entries(&mut self, additional: usize) {
        if let Some(face_colors) = &mut self.face_colors {
            face_colors.reserve(additional);
        }
    }

    /// Consumes the palette, returning `(colors, face_colors)`. The face
    /// color array is empty if it never started.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Color>, Vec<Option<u32>>) {
        (self.colors, self.face_colors.unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }

    #[test]
    fn lookup_deduplicates_colors() {
        let mut palette = ColorPalette::new();
        assert_eq!(palette.lookup(red()), 0);
        assert_eq!(palette.lookup(blue()), 1);
        assert_eq!(palette.lookup(red()), 0);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn first_colored_face_backfills_sentinels() {
        let mut palette = ColorPalette::new();
        // Two uncolored faces before the array starts: nothing recorded.
        palette.record(0, None);
        palette.record(1, None);
        assert!(!palette.started());

        let idx = palette.lookup(red());
        palette.record(2, Some(idx));

        let (_, face_colors) = palette.into_parts();
        assert_eq!(face_colors, vec![None, None, Some(0)]);
    }

    #[test]
    fn uncolored_faces_append_sentinels_once_started() {
        let mut palette = ColorPalette::new();
        let idx = palette.lookup(blue());
        palette.record(0, Some(idx));
        palette.record(1, None);

        let (_, face_colors) = palette.into_parts();
        assert_eq!(face_colors, vec![Some(0), None]);
    }

    #[test]
    fn ensure_started_is_idempotent() {
        let mut palette = ColorPalette::new();
        palette.ensure_started(2);
        palette.ensure_started(5);

        let (_, face_colors) = palette.into_parts();
        assert_eq!(face_colors, vec![None, None]);
    }
}
