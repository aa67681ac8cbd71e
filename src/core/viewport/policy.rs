use crate::core::data::viewport::Viewport;
use thiserror::Error;

pub const DEFAULT_MIN_EXTENT: f64 = 1e-12;
const CLAMPED_ZOOM_DIVISOR: f64 = 1.5;
const UNCLAMPED_ZOOM_SCALE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomPolicyError {
    #[error("zoom divisor must be finite and greater than 1, got {0}")]
    InvalidDivisor(f64),
    #[error("zoom scale must be finite and strictly between 0 and 1, got {0}")]
    InvalidScale(f64),
    #[error("minimum extent must be finite and non-negative, got {0}")]
    InvalidMinExtent(f64),
}

/// How a zoom factor shrinks the visible extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomFactor {
    /// New extent is the old extent divided by the factor (factor > 1).
    Divisor(f64),
    /// New extent is the old extent multiplied by the factor (0 < factor < 1).
    Scale(f64),
}

impl ZoomFactor {
    #[must_use]
    pub fn apply(self, extent: f64) -> f64 {
        match self {
            Self::Divisor(divisor) => extent / divisor,
            Self::Scale(scale) => extent * scale,
        }
    }

    pub fn validate(self) -> Result<(), ZoomPolicyError> {
        match self {
            Self::Divisor(divisor) if !divisor.is_finite() || divisor <= 1.0 => {
                Err(ZoomPolicyError::InvalidDivisor(divisor))
            }
            Self::Scale(scale) if !scale.is_finite() || scale <= 0.0 || scale >= 1.0 => {
                Err(ZoomPolicyError::InvalidScale(scale))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPolicy {
    pub factor: ZoomFactor,
    /// Hard bound no viewport edge may cross. `None` disables clamping.
    pub bound: Option<Viewport>,
    /// Smallest width or height a zoom may produce.
    pub min_extent: f64,
}

pub(crate) fn default_bound() -> Viewport {
    Viewport::new(-2.0, 1.0, -1.5, 1.5).expect("default zoom bound is valid")
}

impl ZoomPolicy {
    pub fn new(
        factor: ZoomFactor,
        bound: Option<Viewport>,
        min_extent: f64,
    ) -> Result<Self, ZoomPolicyError> {
        let policy = Self {
            factor,
            bound,
            min_extent,
        };
        policy.validate()?;

        Ok(policy)
    }

    /// Divides extents by 1.5 and clamps to the default initial view.
    #[must_use]
    pub fn clamped() -> Self {
        Self {
            factor: ZoomFactor::Divisor(CLAMPED_ZOOM_DIVISOR),
            bound: Some(default_bound()),
            min_extent: DEFAULT_MIN_EXTENT,
        }
    }

    /// Halves extents with no hard bound.
    #[must_use]
    pub fn unclamped() -> Self {
        Self {
            factor: ZoomFactor::Scale(UNCLAMPED_ZOOM_SCALE),
            bound: None,
            min_extent: DEFAULT_MIN_EXTENT,
        }
    }

    pub fn validate(&self) -> Result<(), ZoomPolicyError> {
        self.factor.validate()?;

        if !self.min_extent.is_finite() || self.min_extent < 0.0 {
            return Err(ZoomPolicyError::InvalidMinExtent(self.min_extent));
        }

        Ok(())
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self::clamped()
    }
}
