use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use thiserror::Error;

fn raster_to_buffer_size(raster: Raster) -> usize {
    raster.size() * 3
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("raster size {raster_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    raster: Raster,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(raster: Raster, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let raster_size = raster_to_buffer_size(raster);

        if raster_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { raster, buffer })
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        let index = self.raster.index_of(point)? * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer.chunks_exact(3).map(|rgb| Colour {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        })
    }
}
