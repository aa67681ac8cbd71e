use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} raster",
        .point.x, .point.y, .raster.width(), .raster.height()
    )]
    PointOutsideRaster { point: Point, raster: Raster },
}

/// Linear interpolation of pixel `index` across `[min, max]` for an axis of
/// `count` pixels. The first pixel lands on `min` and the last on `max`.
#[must_use]
pub fn interpolate_axis(min: f64, max: f64, index: u32, count: u32) -> f64 {
    if count < 2 {
        return min;
    }

    let t = f64::from(index) / f64::from(count - 1);

    // exact at both ends, unlike min + (max - min) * t
    min * (1.0 - t) + max * t
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    raster: Raster,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !raster.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRaster {
            point: pixel_position,
            raster,
        });
    }

    let real = interpolate_axis(
        viewport.x_min(),
        viewport.x_max(),
        pixel_position.x as u32,
        raster.width(),
    );
    let imag = interpolate_axis(
        viewport.y_min(),
        viewport.y_max(),
        pixel_position.y as u32,
        raster.height(),
    );

    Ok(Complex { real, imag })
}

/// Samples `viewport` at every pixel of `raster`.
#[must_use]
pub fn build_grid(viewport: &Viewport, raster: Raster) -> Grid {
    let reals: Vec<f64> = (0..raster.width())
        .map(|col| interpolate_axis(viewport.x_min(), viewport.x_max(), col, raster.width()))
        .collect();

    let samples = (0..raster.height())
        .flat_map(|row| {
            let imag = interpolate_axis(viewport.y_min(), viewport.y_max(), row, raster.height());
            reals.iter().map(move |&real| Complex { real, imag })
        })
        .collect();

    Grid::from_samples(raster, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_view() -> Viewport {
        Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let raster = Raster::new(101, 101).unwrap();
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, raster, &viewport).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right() {
        let raster = Raster::new(101, 101).unwrap();
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 100, y: 100 }, raster, &viewport).unwrap();

        assert_eq!(result, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let raster = Raster::new(101, 101).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, raster, &unit_view()).unwrap();

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_outside_raster_fails() {
        let raster = Raster::new(100, 100).unwrap();
        let point1 = Point { x: 100, y: 50 };
        let point2 = Point { x: -10, y: -10 };

        assert_eq!(
            pixel_to_complex_coords(point1, raster, &unit_view()),
            Err(PixelToComplexCoordsError::PointOutsideRaster {
                point: point1,
                raster
            })
        );
        assert_eq!(
            pixel_to_complex_coords(point2, raster, &unit_view()),
            Err(PixelToComplexCoordsError::PointOutsideRaster {
                point: point2,
                raster
            })
        );
    }

    #[test]
    fn test_interpolate_axis_is_symmetric() {
        // mirrored pixels land on mirrored coordinates
        for index in 0..10 {
            let left = interpolate_axis(-1.0, 1.0, index, 10);
            let right = interpolate_axis(-1.0, 1.0, 9 - index, 10);
            assert!((left + right).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interpolate_axis_single_pixel_uses_minimum() {
        assert_eq!(interpolate_axis(-2.0, 1.0, 0, 1), -2.0);
    }

    #[test]
    fn test_build_grid_shape_and_corners() {
        let raster = Raster::new(80, 60).unwrap();
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        let grid = build_grid(&viewport, raster);

        assert_eq!(grid.len(), 80 * 60);
        assert_eq!(grid.raster(), raster);
        assert_eq!(grid.sample(Point { x: 0, y: 0 }), Some(Complex::new(-2.0, -1.5)));
        assert_eq!(grid.sample(Point { x: 79, y: 0 }), Some(Complex::new(1.0, -1.5)));
        assert_eq!(grid.sample(Point { x: 0, y: 59 }), Some(Complex::new(-2.0, 1.5)));
        assert_eq!(grid.sample(Point { x: 79, y: 59 }), Some(Complex::new(1.0, 1.5)));
    }

    #[test]
    fn test_build_grid_matches_point_mapping() {
        let raster = Raster::new(7, 5).unwrap();
        let viewport = Viewport::new(-0.75, 0.25, 0.1, 0.6).unwrap();
        let grid = build_grid(&viewport, raster);

        for y in 0..5 {
            for x in 0..7 {
                let point = Point { x, y };
                let expected = pixel_to_complex_coords(point, raster, &viewport).unwrap();
                assert_eq!(grid.sample(point), Some(expected));
            }
        }
    }

    #[test]
    fn test_build_grid_rows_share_imaginary_part() {
        let raster = Raster::new(4, 3).unwrap();
        let grid = build_grid(&unit_view(), raster);

        for row in grid.samples().chunks_exact(4) {
            assert!(row.iter().all(|c| c.imag == row[0].imag));
        }
    }
}
