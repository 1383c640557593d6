use crate::shade_pipeline::common::error::Result;
use crate::shade_pipeline::raster::types::RasterData;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterData>;
}
