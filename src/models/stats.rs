//! Statistics and index selection shared by the template models.

/// Mean and maximum of the per-template lengths of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LengthSummary {
    pub avg: f32,
    pub max: usize,
}

impl LengthSummary {
    /// Summarizes `lengths` in a single pass.
    ///
    /// The mean divides by the number of lengths seen, so an empty input yields
    /// `avg == 0.0` and `max == 0`.
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut total: u128 = 0;
        let mut count: usize = 0;
        let mut max = 0;

        for length in lengths {
            total += length as u128;
            count += 1;
            max = max.max(length);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            avg: (total as f64 / count as f64) as f32,
            max,
        }
    }
}

/// Maps a uniform value to an index in `0..size`.
///
/// The index is clamped to `size - 1` so that a value rounding up to 1.0
/// still lands inside the collection. `size` must be non-zero.
pub fn draw_index(u: f64, size: usize) -> usize {
    debug_assert!(size > 0);
    ((u * size as f64) as usize).min(size - 1)
}
