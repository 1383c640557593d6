//! Common utilities module
//!
//! This module contains shared utilities used across the shading pipeline.

pub mod error;

pub use error::{Result, ShadeError};
