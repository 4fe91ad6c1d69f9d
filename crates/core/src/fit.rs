//! Aspect-preserving fit of an image inside a bounding box.

use serde::{Deserialize, Serialize};

use crate::error::MosaicError;

/// A fitted size in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSize {
    pub width: f64,
    pub height: f64,
}

impl FitSize {
    /// Floors both dimensions to whole pixels, never going below 1.
    ///
    /// Assigning a fractional size to a drawing surface truncates it; the
    /// lower bound keeps very thin images drawable.
    pub fn to_pixels(self) -> (u32, u32) {
        let w = self.width.floor().clamp(1.0, f64::from(u32::MAX)) as u32;
        let h = self.height.floor().clamp(1.0, f64::from(u32::MAX)) as u32;
        (w, h)
    }
}

/// Computes the largest aspect-preserving size that fits in `max_width x max_height`.
///
/// The width constraint is applied first, then the height constraint on the
/// possibly already-shrunk result. Images already inside the box are returned
/// unchanged; nothing is ever scaled up.
///
/// Returns `MosaicError::InvalidDimensions` if `natural_height` is zero, since
/// the aspect ratio is undefined.
pub fn fit_size(
    natural_width: f64,
    natural_height: f64,
    max_width: f64,
    max_height: f64,
) -> Result<FitSize, MosaicError> {
    if natural_height <= 0.0 || natural_width < 0.0 {
        return Err(MosaicError::InvalidDimensions);
    }
    let scale = natural_width / natural_height;
    let (mut width, mut height) = (natural_width, natural_height);
    if width > max_width {
        width = max_width;
        height = max_width / scale;
    }
    if height > max_height {
        height = max_height;
        width = max_height * scale;
    }
    Ok(FitSize { width, height })
}
