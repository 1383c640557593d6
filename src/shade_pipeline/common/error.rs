use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadeError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode raster: {0}")]
    DecodeError(String),

    #[error("Invalid raster dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShadeError>;
