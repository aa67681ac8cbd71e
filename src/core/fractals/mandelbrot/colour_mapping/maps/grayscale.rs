use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, normalised_intensity,
};

/// Equal-channel intensity, `(v, v, v)`.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_value: u32,
}

impl ColourMap<u32> for MandelbrotGrayscale {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        let Some(v) = normalised_intensity(value, self.max_value)? else {
            return Ok(Colour::BLACK);
        };

        Ok(Colour { r: v, g: v, b: v })
    }

    fn display_name(&self) -> &str {
        "Grayscale"
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_value: u32) -> Self {
        Self { max_value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_white_at_maximum() {
        let mapper = MandelbrotGrayscale::new(100);

        assert_eq!(mapper.map(100).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_map_returns_black_at_zero() {
        let mapper = MandelbrotGrayscale::new(100);

        assert_eq!(mapper.map(0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_midpoint() {
        let mapper = MandelbrotGrayscale::new(100);

        assert_eq!(mapper.map(50).unwrap(), Colour { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_map_with_zero_maximum_is_black() {
        let mapper = MandelbrotGrayscale::new(0);

        assert_eq!(mapper.map(0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_returns_error_when_value_exceeds_max() {
        let mapper = MandelbrotGrayscale::new(100);

        assert_eq!(
            mapper.map(101),
            Err(ColourMapError::ValueExceedsMax {
                value: 101,
                max_value: 100
            })
        );
    }
}
