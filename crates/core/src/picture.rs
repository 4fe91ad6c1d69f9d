//! Two-dimensional RGBA pixel grid and conversion to and from raster buffers.
//!
//! A `Picture` stores `width * height` [`Rgba`] values in row-major order with
//! the origin at the top-left. A raster buffer is the flat interleaved
//! `R, G, B, A, R, G, B, A, ...` byte layout used by canvas `ImageData` and
//! `image::RgbaImage`.

use crate::error::MosaicError;
use crate::rgba::Rgba;

/// Bytes per pixel in a raster buffer.
pub const CHANNELS: usize = 4;

/// An immutable grid of RGBA pixels.
///
/// Zero-sized pictures are valid; compressing with a block size larger than
/// the image produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

/// Returns `width * height * 4`, or `InvalidDimensions` on overflow.
pub fn raster_len(width: usize, height: usize) -> Result<usize, MosaicError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(MosaicError::InvalidDimensions)
}

impl Picture {
    /// Reads `width * height` pixels from an interleaved RGBA buffer.
    ///
    /// Returns `MosaicError::MalformedBuffer` if the buffer is shorter than
    /// `width * height * 4`. Bytes past that length are ignored.
    pub fn from_raster(buffer: &[u8], width: usize, height: usize) -> Result<Self, MosaicError> {
        let expected = raster_len(width, height)?;
        if buffer.len() < expected {
            return Err(MosaicError::MalformedBuffer {
                expected,
                got: buffer.len(),
            });
        }
        let pixels = buffer[..expected]
            .chunks_exact(CHANNELS)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a picture from a pre-built row-major pixel vector.
    ///
    /// Returns `MosaicError::DimensionMismatch` unless
    /// `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, MosaicError> {
        let expected = width
            .checked_mul(height)
            .ok_or(MosaicError::InvalidDimensions)?;
        if pixels.len() != expected {
            return Err(MosaicError::DimensionMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a picture where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Result<Self, MosaicError> {
        let len = width
            .checked_mul(height)
            .ok_or(MosaicError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Writes the picture back out as an interleaved RGBA buffer of exactly
    /// `width * height * 4` bytes.
    pub fn to_raster(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.channels()).collect()
    }

    /// Picture width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Picture height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the picture has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgba> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// The `row`-th row as a slice of exactly `width` pixels.
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Rgba] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> + '_ {
        // chunks_exact(0) panics; a zero-width picture has no pixels anyway.
        self.pixels.chunks_exact(self.width.max(1))
    }
}
