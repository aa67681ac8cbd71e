use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliArgsError {
    #[error("unknown colour scheme '{0}', expected 'grayscale' or 'phase'")]
    UnknownScheme(String),
    #[error("click '{0}' is not of the form PX,PY")]
    InvalidClick(String),
}

/// Renders the Mandelbrot set to a PPM file, zooming into each click in turn.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mandelbrot_viewer")]
pub struct CliArgs {
    /// Pixel clicks as PX,PY, applied in the order given
    #[arg(value_parser = parse_click)]
    pub clicks: Vec<Point>,

    /// Where to write the frame
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,

    /// Colour scheme: grayscale or phase
    #[arg(long, default_value = "grayscale", value_parser = parse_scheme)]
    pub scheme: MandelbrotColourMapKinds,
}

fn parse_click(arg: &str) -> Result<Point, CliArgsError> {
    let invalid = || CliArgsError::InvalidClick(arg.to_string());

    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<i32>().map_err(|_| invalid())?;

    Ok(Point { x, y })
}

fn parse_scheme(arg: &str) -> Result<MandelbrotColourMapKinds, CliArgsError> {
    MandelbrotColourMapKinds::from_key(arg)
        .ok_or_else(|| CliArgsError::UnknownScheme(arg.to_string()))
}
