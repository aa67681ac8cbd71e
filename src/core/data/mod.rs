pub mod colour;
pub mod complex;
pub mod escape_field;
pub mod grid;
pub mod pixel_buffer;
pub mod point;
pub mod raster;
pub mod viewport;
