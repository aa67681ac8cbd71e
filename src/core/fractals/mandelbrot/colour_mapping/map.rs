use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

/// Scales `value / max_value` onto `0..=255`, rounding to nearest.
///
/// Returns `None` when `max_value` is 0; callers render that case black.
pub(crate) fn normalised_intensity(
    value: u32,
    max_value: u32,
) -> Result<Option<u8>, ColourMapError> {
    if value > max_value {
        return Err(ColourMapError::ValueExceedsMax { value, max_value });
    }

    if max_value == 0 {
        return Ok(None);
    }

    let n = f64::from(value) / f64::from(max_value);

    Ok(Some((n * 255.0).round() as u8))
}
