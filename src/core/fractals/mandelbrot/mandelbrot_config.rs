use crate::core::{
    actions::{generate_fractal::generate_escape_field::Evaluation, render::RenderSettings},
    data::{
        raster::{Raster, RasterError},
        viewport::Viewport,
    },
    fractals::mandelbrot::{
        colour_mapping::kinds::MandelbrotColourMapKinds, errors::MandelbrotError,
    },
    viewport::policy::{ZoomPolicy, ZoomPolicyError, default_bound},
};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

pub(crate) fn default_raster() -> Raster {
    Raster::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default raster is valid")
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    ZoomPolicy(#[from] ZoomPolicyError),
    #[error("initial viewport {viewport:?} is not inside the zoom bound {bound:?}")]
    ViewportOutsideBound { viewport: Viewport, bound: Viewport },
}

/// Construction-time settings for a viewer. Fixed once the viewer exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub raster: Raster,
    pub max_iterations: u32,
    pub initial_viewport: Viewport,
    pub zoom: ZoomPolicy,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub evaluation: Evaluation,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            raster: default_raster(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_viewport: default_bound(),
            zoom: ZoomPolicy::clamped(),
            colour_map_kind: MandelbrotColourMapKinds::default(),
            evaluation: Evaluation::default(),
        }
    }
}

impl MandelbrotConfig {
    /// Default settings with halving zoom and no hard bound.
    #[must_use]
    pub fn unclamped() -> Self {
        Self {
            zoom: ZoomPolicy::unclamped(),
            ..Self::default()
        }
    }

    pub fn with_raster(mut self, width: u32, height: u32) -> Result<Self, ConfigError> {
        self.raster = Raster::new(width, height)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        self.zoom.validate()?;

        if let Some(bound) = self.zoom.bound {
            if !bound.contains_viewport(&self.initial_viewport) {
                return Err(ConfigError::ViewportOutsideBound {
                    viewport: self.initial_viewport,
                    bound,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub(crate) fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            raster: self.raster,
            max_iterations: self.max_iterations,
            colour_map_kind: self.colour_map_kind,
            evaluation: self.evaluation,
        }
    }
}
