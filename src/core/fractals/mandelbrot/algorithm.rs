use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Escape-time evaluation of the Mandelbrot recurrence `z <- z² + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, c: Complex) -> Self::Success {
        escape_time(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// Returns the index of the first step whose result leaves the escape radius,
/// or `max_iterations` if the orbit stays bounded for the whole budget.
///
/// The orbit starts at `z = c` and each step applies `z <- z² + c` before the
/// magnitude test, so a point already outside the radius escapes at step 0.
/// Iteration stops at the first escape, which keeps the recorded index stable
/// and the orbit from overflowing.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}
