use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::shade_pipeline::{
    bitmap::{shade, Bitmap},
    colormap::Palette,
    common::error::{Result, ShadeError},
    raster::{RasterData, RasterReader, TiffReader, ValueRange},
    sessions::ShadeConfig,
};

/// Orchestrates raster decoding and initial shading.
///
/// The reader is the external decoder collaborator; everything after it is
/// pure in-memory computation.
pub struct RasterPipeline<R: RasterReader> {
    reader: R,
    config: ShadeConfig,
}

impl RasterPipeline<TiffReader> {
    pub fn new(config: ShadeConfig) -> Self {
        Self {
            reader: TiffReader,
            config,
        }
    }
}

impl<R: RasterReader> RasterPipeline<R> {
    pub fn with_custom(reader: R, config: ShadeConfig) -> Self {
        Self { reader, config }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ShadeError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ShadeError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decode raw raster bytes, compute the value range and shade with the
    /// configured default palette.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn open(&self, input_data: &[u8]) -> Result<RasterSession> {
        info!("Opening raster");

        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raster.width,
                height = raster.height
            )
            .entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }

        let range = {
            let _span = tracing::info_span!("scan_value_range").entered();
            ValueRange::scan(&raster.samples)
        };

        let mut session = RasterSession {
            bitmap: Bitmap::new(raster.width, raster.height)?,
            kilobytes: input_data.len() as f64 / 1000.0,
            palette: self.config.default_palette,
            range,
            raster,
        };

        {
            let _span = tracing::info_span!("shade").entered();
            session.run_shade();
        }

        info!(
            width = session.raster.width,
            height = session.raster.height,
            palette = session.palette.name(),
            "Raster opened"
        );
        Ok(session)
    }

    /// Read a raster file from disk and open it.
    #[instrument(skip(self, path))]
    pub fn open_file<P: AsRef<Path>>(&self, path: P) -> Result<RasterSession> {
        let path = path.as_ref();
        info!(input = %path.display(), "Opening raster file");

        let input_data = std::fs::read(path)
            .map_err(|e| ShadeError::InputReadError(format!("{}: {}", path.display(), e)))?;

        self.open(&input_data)
    }

    pub fn config(&self) -> &ShadeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ShadeConfig) {
        self.config = config;
    }
}

/// One opened raster: immutable samples plus the bitmap they shade into.
///
/// The value range is scanned once at open; palette switches only re-run
/// the shading pass against the same bitmap allocation.
#[derive(Debug)]
pub struct RasterSession {
    raster: RasterData,
    range: Option<ValueRange>,
    bitmap: Bitmap,
    palette: Palette,
    kilobytes: f64,
}

impl RasterSession {
    fn run_shade(&mut self) {
        let (min, max) = match self.range {
            Some(range) => (range.min, range.max),
            // All-NaN raster; every pixel goes transparent regardless.
            None => (f32::INFINITY, f32::NEG_INFINITY),
        };
        shade(
            &mut self.bitmap,
            self.palette.control_points(),
            &self.raster.samples,
            min,
            max,
        );
    }

    /// Re-run the shading pass with a new palette and hand back the
    /// updated buffer.
    #[instrument(skip(self), fields(palette = palette.name()))]
    pub fn reshade(&mut self, palette: Palette) -> &[u8] {
        self.palette = palette;
        self.run_shade();
        self.bitmap.as_bytes()
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// The full encoded bitmap, ready for a generic image decoder.
    pub fn bitmap_bytes(&self) -> &[u8] {
        self.bitmap.as_bytes()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    /// Source file size in kilobytes, for host-side display.
    pub fn kilobytes(&self) -> f64 {
        self.kilobytes
    }

    pub fn write_bitmap(&self, output: &mut dyn Write) -> Result<()> {
        output.write_all(self.bitmap.as_bytes())?;
        Ok(())
    }

    /// Serialize the current bitmap to a file.
    #[instrument(skip(self, path))]
    pub fn save_bitmap<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!(output = %path.display(), "Saving bitmap");

        let mut output_file = std::fs::File::create(path)
            .map_err(|e| ShadeError::OutputWriteError(format!("{}: {}", path.display(), e)))?;

        self.write_bitmap(&mut output_file)
    }
}
