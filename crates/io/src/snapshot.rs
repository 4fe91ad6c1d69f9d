//! PNG output of a [`Picture`].
//!
//! Feature-gated behind `png` (default on) so that builds which only need
//! decoding of other formats can leave the encoder out.

use std::path::Path;

use mosaic_core::error::MosaicError;
use mosaic_core::Picture;

/// Writes a picture as a PNG image.
///
/// Returns `MosaicError::InvalidDimensions` if the picture is empty or its
/// dimensions overflow `u32`, or `MosaicError::Io` on write failure.
pub fn write_png(picture: &Picture, path: &Path) -> Result<(), MosaicError> {
    if picture.is_empty() {
        return Err(MosaicError::InvalidDimensions);
    }
    let w = u32::try_from(picture.width()).map_err(|_| MosaicError::InvalidDimensions)?;
    let h = u32::try_from(picture.height()).map_err(|_| MosaicError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, picture.to_raster())
        .ok_or_else(|| MosaicError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| MosaicError::Io(e.to_string()))
}
