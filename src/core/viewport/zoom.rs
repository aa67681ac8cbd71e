use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use crate::core::viewport::policy::ZoomPolicy;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomError {
    #[error("zoom click rejected: {0}")]
    PointOutsideRaster(#[from] PixelToComplexCoordsError),
    #[error("zoom produced a degenerate viewport: {0}")]
    Degenerate(#[from] ViewportError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomReport {
    pub previous: Viewport,
    pub viewport: Viewport,
    /// At least one edge was pulled back inside the hard bound.
    pub bound_clamped: bool,
    /// The minimum extent guard stopped the view from shrinking further.
    pub extent_floored: bool,
}

fn shrink_extent(extent: f64, policy: &ZoomPolicy) -> (f64, bool) {
    let zoomed = policy.factor.apply(extent);
    // never grow a view that is already below the floor
    let floor = policy.min_extent.min(extent);

    if zoomed < floor {
        (floor, true)
    } else {
        (zoomed, false)
    }
}

/// Computes the viewport after zooming into `click`.
///
/// The click is mapped to the complex plane against `viewport`, the extents
/// shrink by the policy factor, the view recentres on the click, and each
/// edge is then clamped independently into the policy bound. A click near
/// the bound therefore yields a view that is no longer centred on it.
pub fn zoom_viewport(
    viewport: &Viewport,
    click: Point,
    raster: Raster,
    policy: &ZoomPolicy,
) -> Result<ZoomReport, ZoomError> {
    let center = pixel_to_complex_coords(click, raster, viewport)?;

    let (width, width_floored) = shrink_extent(viewport.width(), policy);
    let (height, height_floored) = shrink_extent(viewport.height(), policy);

    let candidate = Viewport::centred_on(center, width, height)?;

    let Some(bound) = &policy.bound else {
        return Ok(ZoomReport {
            previous: *viewport,
            viewport: candidate,
            bound_clamped: false,
            extent_floored: width_floored || height_floored,
        });
    };

    let clamped = candidate.clamped_to(bound)?;

    // clamping cuts an edge; keep the guard by growing back from that edge
    let floor_width = policy.min_extent.min(viewport.width());
    let floor_height = policy.min_extent.min(viewport.height());
    let (x_min, x_max, width_regrown) = regrow_axis(
        clamped.x_min(),
        clamped.x_max(),
        floor_width,
        bound.x_min(),
        bound.x_max(),
    );
    let (y_min, y_max, height_regrown) = regrow_axis(
        clamped.y_min(),
        clamped.y_max(),
        floor_height,
        bound.y_min(),
        bound.y_max(),
    );

    Ok(ZoomReport {
        previous: *viewport,
        viewport: Viewport::new(x_min, x_max, y_min, y_max)?,
        bound_clamped: clamped != candidate,
        extent_floored: width_floored || height_floored || width_regrown || height_regrown,
    })
}

fn regrow_axis(min: f64, max: f64, floor: f64, bound_min: f64, bound_max: f64) -> (f64, f64, bool) {
    if max - min >= floor {
        return (min, max, false);
    }

    if min <= bound_min {
        (min, (min + floor).min(bound_max), true)
    } else {
        ((max - floor).max(bound_min), max, true)
    }
}
