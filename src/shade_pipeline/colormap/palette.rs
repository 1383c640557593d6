use crate::shade_pipeline::colormap::tables;
use crate::shade_pipeline::common::error::{Result, ShadeError};

/// The closed set of built-in color ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Grayscale,
    Turbo,
    Viridis,
    Cividis,
    Hot,
    Cool,
    Hsv,
    Terrain,
    GistEarth,
    Gnuplot,
    Rainbow,
}

impl Palette {
    /// Every palette, in presentation order for selection lists.
    pub const ALL: &[Palette] = &[
        Self::Grayscale,
        Self::Turbo,
        Self::Viridis,
        Self::Cividis,
        Self::Hot,
        Self::Cool,
        Self::Hsv,
        Self::Terrain,
        Self::GistEarth,
        Self::Gnuplot,
        Self::Rainbow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Turbo => "Turbo",
            Self::Viridis => "Viridis",
            Self::Cividis => "Cividis",
            Self::Hot => "Hot",
            Self::Cool => "Cool",
            Self::Hsv => "HSV",
            Self::Terrain => "Terrain",
            Self::GistEarth => "GISTEarth",
            Self::Gnuplot => "GNUPlot",
            Self::Rainbow => "Rainbow",
        }
    }

    /// Resolve a palette from its boundary name.
    ///
    /// Fails with [`ShadeError::UnknownPalette`] instead of defaulting
    /// silently, so a host UI echoing back a stale name hears about it.
    pub fn from_name(name: &str) -> Result<Palette> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| ShadeError::UnknownPalette(name.to_string()))
    }

    /// The ramp's control points: RGB triples in [0, 1], evenly spaced
    /// across the normalized domain.
    pub fn control_points(&self) -> &'static [tables::ControlPoint] {
        let points = match self {
            Self::Grayscale => tables::GRAYSCALE,
            Self::Turbo => tables::TURBO,
            Self::Viridis => tables::VIRIDIS,
            Self::Cividis => tables::CIVIDIS,
            Self::Hot => tables::HOT,
            Self::Cool => tables::COOL,
            Self::Hsv => tables::HSV,
            Self::Terrain => tables::TERRAIN,
            Self::GistEarth => tables::GIST_EARTH,
            Self::Gnuplot => tables::GNUPLOT,
            Self::Rainbow => tables::RAINBOW,
        };
        debug_assert!(points.len() >= 2);
        points
    }
}
