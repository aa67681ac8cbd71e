use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;

/// Complex sample points for every pixel of a raster, stored row-major.
///
/// Built by [`build_grid`](crate::core::util::pixel_to_complex_coords::build_grid)
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    raster: Raster,
    samples: Vec<Complex>,
}

impl Grid {
    pub(crate) fn from_samples(raster: Raster, samples: Vec<Complex>) -> Self {
        debug_assert_eq!(samples.len(), raster.size());

        Self { raster, samples }
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn sample(&self, point: Point) -> Option<Complex> {
        self.raster.index_of(point).map(|index| self.samples[index])
    }
}
