#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading and writing functions.
///
/// Dispatches on the file extension between the plain-text PPM codec and
/// the generic raster formats handled by the `image` crate.
pub mod functional;

/// Plain-text PPM (P3) image encoding and decoding.
pub mod ppm;

pub use crate::error::IoError;
