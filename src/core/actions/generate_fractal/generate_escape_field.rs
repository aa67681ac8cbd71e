use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
use crate::core::data::grid::Grid;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// How grid samples are scheduled. Both strategies produce identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    #[default]
    Sequential,
    Parallel,
}

pub fn generate_escape_field(
    grid: &Grid,
    algorithm: &MandelbrotAlgorithm,
    evaluation: Evaluation,
) -> Result<EscapeField, EscapeFieldError> {
    let counts = match evaluation {
        Evaluation::Sequential => generate_fractal(grid, algorithm),
        Evaluation::Parallel => generate_fractal_rayon(grid, algorithm),
    };

    EscapeField::new(grid.raster(), algorithm.max_iterations(), counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::raster::Raster;
    use crate::core::data::viewport::Viewport;
    use crate::core::util::pixel_to_complex_coords::build_grid;

    fn default_view() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap()
    }

    fn nearest_pixel(viewport: &Viewport, raster: Raster, target: Complex) -> Point {
        let col =
            (target.real - viewport.x_min()) / viewport.width() * f64::from(raster.width() - 1);
        let row =
            (target.imag - viewport.y_min()) / viewport.height() * f64::from(raster.height() - 1);

        Point {
            x: col.round() as i32,
            y: row.round() as i32,
        }
    }

    #[test]
    fn test_field_has_raster_shape() {
        let raster = Raster::new(64, 48).unwrap();
        let grid = build_grid(&default_view(), raster);
        let algorithm = MandelbrotAlgorithm::new(50).unwrap();

        let field = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();

        assert_eq!(field.raster(), raster);
        assert_eq!(field.counts().len(), 64 * 48);
        assert_eq!(field.max_iterations(), 50);
    }

    #[test]
    fn test_every_count_is_within_budget() {
        let grid = build_grid(&default_view(), Raster::new(80, 60).unwrap());
        let algorithm = MandelbrotAlgorithm::new(30).unwrap();

        let field = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();

        assert!(field.counts().iter().all(|&count| count <= 30));
    }

    #[test]
    fn test_repeated_evaluation_is_deterministic() {
        let grid = build_grid(&default_view(), Raster::new(80, 60).unwrap());
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        let first = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();
        let second = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let grid = build_grid(&default_view(), Raster::new(120, 90).unwrap());
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        let sequential = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();
        let parallel = generate_escape_field(&grid, &algorithm, Evaluation::Parallel).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_sample_nearest_origin_reports_sentinel() {
        let viewport = default_view();
        let raster = Raster::new(800, 600).unwrap();
        let grid = build_grid(&viewport, raster);
        let origin = nearest_pixel(&viewport, raster, Complex::new(0.0, 0.0));

        for max_iterations in [1, 7, 100] {
            let algorithm = MandelbrotAlgorithm::new(max_iterations).unwrap();
            let field = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();

            assert_eq!(field.count_at(origin), Some(max_iterations));
        }
    }

    #[test]
    fn test_sample_nearest_far_corner_escapes_immediately() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let raster = Raster::new(40, 40).unwrap();
        let grid = build_grid(&viewport, raster);
        let corner = nearest_pixel(&viewport, raster, Complex::new(2.0, 2.0));
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        let field = generate_escape_field(&grid, &algorithm, Evaluation::Sequential).unwrap();

        assert_eq!(corner, Point { x: 39, y: 39 });
        assert_eq!(field.count_at(corner), Some(0));
    }
}
