pub mod grayscale;
pub mod phase_shifted;
