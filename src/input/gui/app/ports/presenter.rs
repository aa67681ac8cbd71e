use thiserror::Error;

use crate::adapters::pixel_format::FrameSizeError;
use crate::core::data::{pixel_buffer::PixelBuffer, point::Point, raster::Raster};

#[derive(Debug, Error)]
pub enum GuiPresentError {
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("surface texture error: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    FrameSize(#[from] FrameSizeError),
    #[error(
        "frame is {}x{} but the surface expects {}x{}",
        .actual.width(), .actual.height(), .expected.width(), .expected.height()
    )]
    RasterMismatch { expected: Raster, actual: Raster },
}

pub trait GuiPresenterPort {
    /// Copies a finished frame into the window's framebuffer.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), GuiPresentError>;
    /// Draws the framebuffer to the window surface.
    fn redraw(&self) -> Result<(), GuiPresentError>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiPresentError>;
    /// Maps a physical window position to a raster pixel. Positions off the
    /// raster still map, to coordinates outside it.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point;
}
