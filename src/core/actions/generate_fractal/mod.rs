pub mod generate_escape_field;
pub mod generate_fractal;
pub mod generate_fractal_rayon;
pub mod ports;
