//! Error types for the pixel-mosaic core.

use thiserror::Error;

/// Errors produced by picture construction, transforms, and quantization.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// A raster buffer was shorter than `width * height * 4` bytes.
    #[error("malformed raster buffer: expected at least {expected} bytes, got {got}")]
    MalformedBuffer { expected: usize, got: usize },

    /// A block size of zero (or a negative value from an outer layer) was requested.
    #[error("invalid block size {0}: block size must be a positive integer")]
    InvalidBlockSize(i64),

    /// Dimensions overflowed `usize`, or a dimension needed to be non-zero.
    #[error("invalid dimensions: width and height must be non-zero and must not overflow")]
    InvalidDimensions,

    /// A pixel vector did not match the declared picture size.
    #[error("dimension mismatch: expected {expected} pixels, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A transform name was not recognized by the registry.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// A glyph ramp could not be constructed.
    #[error("invalid ramp: {0}")]
    InvalidRamp(String),

    /// An I/O failure in an image-loading or rendering collaborator.
    #[error("I/O error: {0}")]
    Io(String),
}
