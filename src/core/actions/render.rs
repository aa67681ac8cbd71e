use std::time::Instant;

use crate::core::actions::generate_fractal::generate_escape_field::{
    Evaluation, generate_escape_field,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colour_escape_field,
};
use crate::core::data::escape_field::EscapeFieldError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::build_grid;
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error("escape field error: {0}")]
    EscapeField(#[from] EscapeFieldError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

/// Everything a render needs besides the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub raster: Raster,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub evaluation: Evaluation,
}

/// Runs the full pipeline: grid, escape field, colours.
pub fn render(viewport: &Viewport, settings: &RenderSettings) -> Result<PixelBuffer, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(settings.max_iterations)?;

    info!(
        "rendering {}x{} at {} iterations, x [{}, {}], y [{}, {}]",
        settings.raster.width(),
        settings.raster.height(),
        settings.max_iterations,
        viewport.x_min(),
        viewport.x_max(),
        viewport.y_min(),
        viewport.y_max()
    );

    let start = Instant::now();
    let grid = build_grid(viewport, settings.raster);
    let field = generate_escape_field(&grid, &algorithm, settings.evaluation)?;
    let evaluated = start.elapsed();

    let pixel_buffer = colour_escape_field(&field, settings.colour_map_kind)?;

    debug!("escape field evaluated in {:?} ({:?})", evaluated, settings.evaluation);
    info!("render finished in {:?}", start.elapsed());

    Ok(pixel_buffer)
}
