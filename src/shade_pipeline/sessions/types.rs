//! Session configuration types

use crate::shade_pipeline::colormap::Palette;

/// Configuration for opening and shading rasters
#[derive(Debug, Clone)]
pub struct ShadeConfig {
    /// Palette used for the initial shading pass
    pub default_palette: Palette,
    /// Whether to validate raster dimensions before allocating the bitmap
    pub validate_dimensions: bool,
    /// Upper bound on either dimension, guards against absurd allocations
    pub max_dimension: Option<u32>,
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            default_palette: Palette::Grayscale,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl ShadeConfig {
    pub fn builder() -> ShadeConfigBuilder {
        ShadeConfigBuilder::default()
    }
}

/// Builder for ShadeConfig
#[derive(Default)]
pub struct ShadeConfigBuilder {
    default_palette: Option<Palette>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl ShadeConfigBuilder {
    pub fn default_palette(mut self, palette: Palette) -> Self {
        self.default_palette = Some(palette);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ShadeConfig {
        let default = ShadeConfig::default();
        ShadeConfig {
            default_palette: self.default_palette.unwrap_or(default.default_palette),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
