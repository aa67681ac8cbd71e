//! Window adapter: a fixed-size winit window presenting frames through
//! pixels. Primary-button presses zoom, everything else is ignored.

pub mod app;
pub mod commands;
