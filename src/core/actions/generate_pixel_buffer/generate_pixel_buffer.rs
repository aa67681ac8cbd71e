use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates a pixel buffer by mapping input values to colours.
///
/// Streams RGB bytes into a buffer preallocated to `raster.size() * 3`.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    raster: Raster,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(raster.size() * 3);

    for &value in input {
        let Colour { r, g, b } = mapper.map(value)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(raster, buffer)?)
}

/// Colours an escape field, normalising by the largest count it holds.
pub fn colour_escape_field(
    field: &EscapeField,
    kind: MandelbrotColourMapKinds,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let colour_map = mandelbrot_colour_map_factory(kind, field.max_count());

    generate_pixel_buffer(field.counts(), colour_map.as_ref(), field.raster())
}
