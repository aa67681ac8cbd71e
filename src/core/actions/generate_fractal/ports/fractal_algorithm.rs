use crate::core::data::complex::Complex;

/// Per-sample computation over a grid of complex points.
///
/// Implementations must be pure: the same sample always yields the same
/// result, whichever order or thread the samples are evaluated on.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, c: Complex) -> Self::Success;
}
