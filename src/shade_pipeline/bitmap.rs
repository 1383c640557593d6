//! Bitmap encoding and shading module
//!
//! This module owns the output buffer layout and the value-to-color
//! shading pass that fills it.

mod encoder;
mod shade;

pub use encoder::{Bitmap, HEADER_SIZE};
pub use shade::shade;
