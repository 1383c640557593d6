//! Raster shading pipeline module
//!
//! This module turns decoded scalar rasters into displayable bitmap
//! images, with separate modules for raster decoding, color ramps, bitmap
//! encoding and session orchestration.

pub mod bitmap;
pub mod colormap;
pub mod common;
pub mod raster;
pub mod sessions;

pub use common::{Result, ShadeError};

pub use raster::{RasterData, RasterReader, SampleBuffer, TiffReader, ValueRange};

pub use colormap::{ControlPoint, Palette};

pub use bitmap::{shade, Bitmap, HEADER_SIZE};

pub use sessions::{RasterPipeline, RasterSession, ShadeConfig, ShadeConfigBuilder};
