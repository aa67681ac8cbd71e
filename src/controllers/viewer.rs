use crate::core::{
    actions::render::{RenderError, RenderSettings, render},
    data::{pixel_buffer::PixelBuffer, point::Point, raster::Raster, viewport::Viewport},
    fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig},
    viewport::{
        controller::{ViewportController, ViewportControllerError},
        zoom::{ZoomError, ZoomReport},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Controller(#[from] ViewportControllerError),
    #[error(transparent)]
    Zoom(#[from] ZoomError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// The face the display adapters talk to.
///
/// Holds the fixed render settings and the viewport controller. Adapters
/// call [`render`](Self::render) once at startup and again after every
/// accepted [`on_click`](Self::on_click).
#[derive(Debug, Clone)]
pub struct MandelbrotViewer {
    config: MandelbrotConfig,
    settings: RenderSettings,
    controller: ViewportController,
}

impl MandelbrotViewer {
    pub fn new(config: MandelbrotConfig) -> Result<Self, ViewerError> {
        config.validate()?;

        let controller =
            ViewportController::new(config.initial_viewport, config.raster, config.zoom)?;

        Ok(Self {
            settings: config.render_settings(),
            config,
            controller,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.controller.viewport()
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.settings.raster
    }

    pub fn render(&self) -> Result<PixelBuffer, ViewerError> {
        Ok(render(&self.controller.viewport(), &self.settings)?)
    }

    /// Zooms into the clicked pixel. Clicks outside the raster are rejected
    /// and the viewport stays where it was.
    pub fn on_click(&mut self, px: i32, py: i32) -> Result<ZoomReport, ViewerError> {
        Ok(self.controller.zoom_at(Point { x: px, y: py })?)
    }
}
