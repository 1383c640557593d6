//! TIFF raster reader implementation using the tiff library.
//!
//! Decodes GeoTIFF-style rasters into a flat sample buffer. The shading
//! pipeline only cares about width, height and the samples themselves; all
//! other TIFF metadata is ignored.

use std::io::Cursor;

use tracing::debug;

use crate::shade_pipeline::common::error::{Result, ShadeError};
use crate::shade_pipeline::raster::reader::RasterReader;
use crate::shade_pipeline::raster::types::{RasterData, SampleBuffer};

/// Raster reader backed by the tiff crate's decoder.
///
/// Supports 8-bit unsigned, 16-bit unsigned and 32-bit float sample
/// formats. Multi-band images are reduced to their first band, since the
/// shading pipeline renders a single scalar field.
pub struct TiffReader;

impl RasterReader for TiffReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterData> {
        debug!("Decoding TIFF raster, {} bytes", data.len());

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(data))
            .map_err(|e| ShadeError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ShadeError::DecodeError(e.to_string()))?;

        debug!("Decoded raster: {}x{}", width, height);

        let pixels = width as usize * height as usize;
        let image = decoder
            .read_image()
            .map_err(|e| ShadeError::DecodeError(e.to_string()))?;

        let samples = match image {
            tiff::decoder::DecodingResult::U8(values) => {
                SampleBuffer::U8(first_band(values, pixels)?)
            }
            tiff::decoder::DecodingResult::U16(values) => {
                SampleBuffer::U16(first_band(values, pixels)?)
            }
            tiff::decoder::DecodingResult::F32(values) => {
                SampleBuffer::F32(first_band(values, pixels)?)
            }
            _ => {
                return Err(ShadeError::UnsupportedFormat(
                    "only u8, u16 and f32 samples are supported".to_string(),
                ));
            }
        };

        Ok(RasterData {
            width,
            height,
            samples,
        })
    }
}

/// Reduce an interleaved sample vector to its first band.
///
/// A single-band image passes through untouched. For `bands > 1` the
/// decoder hands back `pixels * bands` interleaved samples and we keep
/// every `bands`-th one.
fn first_band<T: Copy>(values: Vec<T>, pixels: usize) -> Result<Vec<T>> {
    if values.len() == pixels {
        return Ok(values);
    }

    if pixels > 0 && values.len() % pixels == 0 {
        let bands = values.len() / pixels;
        debug!("Reducing {}-band raster to first band", bands);
        return Ok(values.iter().copied().step_by(bands).collect());
    }

    Err(ShadeError::DecodeError(format!(
        "sample count {} does not match {} pixels",
        values.len(),
        pixels
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_band_passthrough() {
        let values = vec![1u16, 2, 3, 4];
        assert_eq!(first_band(values, 4).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn first_band_reduces_interleaved() {
        // 2 pixels, 3 bands interleaved
        let values = vec![10u8, 11, 12, 20, 21, 22];
        assert_eq!(first_band(values, 2).unwrap(), vec![10, 20]);
    }

    #[test]
    fn first_band_rejects_mismatch() {
        let values = vec![1.0f32, 2.0, 3.0];
        assert!(first_band(values, 2).is_err());
    }
}
