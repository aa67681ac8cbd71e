//! Input adapters that turn outside events into viewer requests.

#[cfg(feature = "gui")]
pub mod gui;
