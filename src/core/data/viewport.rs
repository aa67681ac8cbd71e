use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error(
        "viewport bounds must be finite with x_min < x_max and y_min < y_max: \
         x [{x_min}, {x_max}], y [{y_min}, {y_max}]"
    )]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// The rectangle of the complex plane mapped onto the raster.
///
/// `x` is the real axis, `y` the imaginary axis. Row 0 of the raster maps to
/// `y_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds the viewport of the given extents centred on `center`.
    pub fn centred_on(center: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        Self::new(
            center.real - width / 2.0,
            center.real + width / 2.0,
            center.imag - height / 2.0,
            center.imag + height / 2.0,
        )
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            self.x_min + self.width() / 2.0,
            self.y_min + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }

    #[must_use]
    pub fn contains_viewport(&self, other: &Viewport) -> bool {
        self.x_min <= other.x_min
            && other.x_max <= self.x_max
            && self.y_min <= other.y_min
            && other.y_max <= self.y_max
    }

    /// Clamps every edge independently into `bound`.
    ///
    /// The result can be asymmetric around the original centre when an edge
    /// saturates. Fails only if the clamped rectangle collapses, which happens
    /// when `self` lies entirely outside `bound`.
    pub fn clamped_to(&self, bound: &Viewport) -> Result<Self, ViewportError> {
        Self::new(
            self.x_min.max(bound.x_min),
            self.x_max.min(bound.x_max),
            self.y_min.max(bound.y_min),
            self.y_max.min(bound.y_max),
        )
    }
}
