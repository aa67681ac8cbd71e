use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeFieldError {
    #[error("escape field holds {counts} counts but the raster has {raster_size} pixels")]
    SizeMismatch { raster_size: usize, counts: usize },
    #[error("escape count {count} exceeds the iteration budget {max_iterations}")]
    CountExceedsMax { count: u32, max_iterations: u32 },
}

/// Escape counts for every grid sample, row-major.
///
/// Each entry is either the iteration index at which the orbit escaped, in
/// `[0, max_iterations)`, or `max_iterations` itself for samples that never
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    raster: Raster,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl EscapeField {
    pub fn new(
        raster: Raster,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeFieldError> {
        if counts.len() != raster.size() {
            return Err(EscapeFieldError::SizeMismatch {
                raster_size: raster.size(),
                counts: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > max_iterations) {
            return Err(EscapeFieldError::CountExceedsMax {
                count,
                max_iterations,
            });
        }

        Ok(Self {
            raster,
            max_iterations,
            counts,
        })
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Largest count present in the field, 0 for an empty field.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn count_at(&self, point: Point) -> Option<u32> {
        self.raster.index_of(point).map(|index| self.counts[index])
    }

    #[must_use]
    pub fn is_sentinel(&self, count: u32) -> bool {
        count == self.max_iterations
    }

    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }
}
