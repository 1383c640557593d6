//! Raster decoding module
//!
//! This module provides the sample buffer model and format-agnostic raster
//! reading capabilities.

mod reader;
mod tiff_reader;
pub mod types;

pub use reader::RasterReader;
pub use tiff_reader::TiffReader;
pub use types::{RasterData, SampleBuffer, ValueRange};
