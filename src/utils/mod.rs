//! Display and console utilities

pub mod display;

pub use display::{BoardFormatter, Color, ColorOutput, ProgressIndicator};
