use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::viewport::policy::{ZoomPolicy, ZoomPolicyError};
use crate::core::viewport::zoom::{ZoomError, ZoomReport, zoom_viewport};
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportControllerError {
    #[error("invalid zoom policy: {0}")]
    InvalidPolicy(#[from] ZoomPolicyError),
    #[error("initial viewport {viewport:?} is not inside the zoom bound {bound:?}")]
    ViewportOutsideBound { viewport: Viewport, bound: Viewport },
}

/// Owns the current viewport and applies zoom requests to it in place.
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    raster: Raster,
    policy: ZoomPolicy,
}

impl ViewportController {
    pub fn new(
        initial: Viewport,
        raster: Raster,
        policy: ZoomPolicy,
    ) -> Result<Self, ViewportControllerError> {
        policy.validate()?;

        if let Some(bound) = policy.bound {
            if !bound.contains_viewport(&initial) {
                return Err(ViewportControllerError::ViewportOutsideBound {
                    viewport: initial,
                    bound,
                });
            }
        }

        Ok(Self {
            viewport: initial,
            raster,
            policy,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// Zooms into the pixel `click`. The viewport is left untouched on error.
    pub fn zoom_at(&mut self, click: Point) -> Result<ZoomReport, ZoomError> {
        let report = zoom_viewport(&self.viewport, click, self.raster, &self.policy)
            .inspect_err(|err| warn!("ignoring zoom at ({}, {}): {err}", click.x, click.y))?;

        debug!(
            "zoom at ({}, {}): {:?} -> {:?}",
            click.x, click.y, report.previous, report.viewport
        );

        if report.bound_clamped {
            debug!("zoom clamped to bound {:?}", self.policy.bound);
        }

        if report.extent_floored {
            debug!("zoom held at minimum extent {}", self.policy.min_extent);
        }

        self.viewport = report.viewport;

        Ok(report)
    }
}
