use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("value {value} exceeds normalisation maximum {max_value}")]
    ValueExceedsMax { value: u32, max_value: u32 },
}

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;
    fn display_name(&self) -> &str;
}
