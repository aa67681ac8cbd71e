use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, normalised_intensity,
};

const GREEN_SHIFT: u16 = 85;
const BLUE_SHIFT: u16 = 170;

/// Cycles the channels by offsetting green and blue, `(v, (v+85) mod 255, (v+170) mod 255)`.
#[derive(Debug)]
pub struct MandelbrotPhaseShifted {
    max_value: u32,
}

fn shift(v: u8, offset: u16) -> u8 {
    ((u16::from(v) + offset) % 255) as u8
}

impl ColourMap<u32> for MandelbrotPhaseShifted {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        let Some(v) = normalised_intensity(value, self.max_value)? else {
            return Ok(Colour::BLACK);
        };

        Ok(Colour {
            r: v,
            g: shift(v, GREEN_SHIFT),
            b: shift(v, BLUE_SHIFT),
        })
    }

    fn display_name(&self) -> &str {
        "Phase-shifted"
    }
}

impl MandelbrotColourMap for MandelbrotPhaseShifted {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::PhaseShifted
    }
}

impl MandelbrotPhaseShifted {
    #[must_use]
    pub fn new(max_value: u32) -> Self {
        Self { max_value }
    }
}
