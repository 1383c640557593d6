//! Session orchestration module
//!
//! This module contains the host-facing boundary: opening rasters,
//! switching palettes and serializing the shaded bitmap.

mod raster_session;
pub mod types;

pub use raster_session::{RasterPipeline, RasterSession};
pub use types::{ShadeConfig, ShadeConfigBuilder};
