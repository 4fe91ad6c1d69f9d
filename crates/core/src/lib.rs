#![deny(unsafe_code)]
//! Core types for the pixel-mosaic image transforms.
//!
//! Provides the `Rgba` pixel and `Picture` grid with raster-buffer
//! conversion, block averaging, the `pixelate`/`compress` transforms behind
//! the `Transform` trait, aspect-preserving fit sizing, and the
//! brightness-to-glyph quantizer used for ASCII rendering.

pub mod ascii;
pub mod average;
pub mod error;
pub mod fit;
pub mod params;
pub mod picture;
pub mod rgba;
pub mod transform;

pub use ascii::{quantize, render_as_text, render_with_ramp, Ramp, DEFAULT_RAMP};
pub use average::{average_block, average_block_with, Divisor};
pub use error::MosaicError;
pub use fit::{fit_size, FitSize};
pub use picture::Picture;
pub use rgba::{ChannelSum, Rgba};
pub use transform::{compress, pixelate, Mode, Transform, TransformKind};
