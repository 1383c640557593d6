//! Color ramp module
//!
//! A fixed set of named palettes, each an ordered sequence of RGB control
//! points spanning the [0, 1] domain.

mod palette;
pub mod tables;

pub use palette::Palette;
pub use tables::ControlPoint;
