use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::write_rgba_frame;
use crate::core::data::{pixel_buffer::PixelBuffer, point::Point, raster::Raster};
use crate::input::gui::app::ports::presenter::{GuiPresentError, GuiPresenterPort};

/// Presents frames through a `pixels` framebuffer sized to the raster.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    raster: Raster,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, raster: Raster) -> Result<Self, GuiPresentError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

        Ok(Self { pixels, raster })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), GuiPresentError> {
        if buffer.raster() != self.raster {
            return Err(GuiPresentError::RasterMismatch {
                expected: self.raster,
                actual: buffer.raster(),
            });
        }

        Ok(write_rgba_frame(buffer, self.pixels.frame_mut())?)
    }

    fn redraw(&self) -> Result<(), GuiPresentError> {
        Ok(self.pixels.render()?)
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiPresentError> {
        Ok(self.pixels.resize_surface(width, height)?)
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point {
        let (x, y) = match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => (x as i32, y as i32),
            Err((x, y)) => (x as i32, y as i32),
        };

        Point { x, y }
    }
}
