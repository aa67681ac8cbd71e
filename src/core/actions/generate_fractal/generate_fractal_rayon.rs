use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::Grid;

/// Evaluates every grid sample in parallel using rayon's work-stealing scheduler.
///
/// Output order matches the grid, so the result is identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(grid: &Grid, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    grid.samples()
        .par_iter()
        .map(|&c| algorithm.compute(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::complex::Complex;
    use crate::core::data::raster::Raster;
    use crate::core::data::viewport::Viewport;
    use crate::core::util::pixel_to_complex_coords::build_grid;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn compute(&self, c: Complex) -> Self::Success {
            ((c.real + 10.0) * 1000.0 + (c.imag + 10.0) * 10.0) as u64
        }
    }

    fn grid(width: u32, height: u32) -> Grid {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();
        build_grid(&viewport, Raster::new(width, height).unwrap())
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubAlgorithm {};
        let grid = grid(11, 9);

        let sequential_results = generate_fractal(&grid, &algorithm);
        let rayon_results = generate_fractal_rayon(&grid, &algorithm);

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubAlgorithm {};
        let grid = grid(1, 1);

        let rayon_results = generate_fractal_rayon(&grid, &algorithm);

        assert_eq!(rayon_results, generate_fractal(&grid, &algorithm));
        assert_eq!(rayon_results.len(), 1);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubAlgorithm {};
        let grid = grid(101, 101);

        let sequential_results = generate_fractal(&grid, &algorithm);
        let rayon_results = generate_fractal_rayon(&grid, &algorithm);

        assert_eq!(rayon_results, sequential_results);
    }
}
