#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::cli::args::{CliArgs, CliArgsError};
pub use crate::controllers::cli::headless::HeadlessController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::viewer::{MandelbrotViewer, ViewerError};
pub use crate::core::actions::generate_fractal::generate_escape_field::{
    Evaluation, generate_escape_field,
};
pub use crate::core::actions::render::{RenderError, RenderSettings, render};
pub use crate::core::data::{
    colour::Colour, complex::Complex, escape_field::EscapeField, grid::Grid,
    pixel_buffer::PixelBuffer, point::Point, raster::Raster, viewport::Viewport,
};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
pub use crate::core::util::pixel_to_complex_coords::{build_grid, pixel_to_complex_coords};
pub use crate::core::viewport::policy::{ZoomFactor, ZoomPolicy};
pub use crate::core::viewport::zoom::{ZoomError, ZoomReport, zoom_viewport};
pub use crate::presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colour_escape_field,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapError;
pub use crate::core::data::{
    escape_field::EscapeFieldError, pixel_buffer::PixelBufferError, raster::RasterError,
    viewport::ViewportError,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
pub use crate::core::viewport::controller::ViewportControllerError;
pub use crate::core::viewport::policy::ZoomPolicyError;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
