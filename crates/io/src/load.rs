//! Decoding image files into a [`Picture`].

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use mosaic_core::error::MosaicError;
use mosaic_core::fit::fit_size;
use mosaic_core::Picture;

/// A bounding box the loaded image must fit inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub max_width: f64,
    pub max_height: f64,
}

impl Bounds {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

/// Converts a decoded image to a picture, shrinking it to `bounds` first if given.
///
/// The image is drawn at its fitted size the same way a canvas `drawImage`
/// call would scale it, then read back as an RGBA raster buffer.
pub fn picture_from_image(img: DynamicImage, bounds: Option<Bounds>) -> Result<Picture, MosaicError> {
    let rgba = fit_to_bounds(img.to_rgba8(), bounds)?;
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    Picture::from_raster(rgba.as_raw(), w, h)
}

fn fit_to_bounds(rgba: RgbaImage, bounds: Option<Bounds>) -> Result<RgbaImage, MosaicError> {
    let Some(b) = bounds else {
        return Ok(rgba);
    };
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Ok(rgba);
    }
    let (fw, fh) = fit_size(f64::from(w), f64::from(h), b.max_width, b.max_height)?.to_pixels();
    if (fw, fh) == (w, h) {
        return Ok(rgba);
    }
    Ok(image::imageops::resize(&rgba, fw, fh, FilterType::Triangle))
}

/// Opens and decodes an image file into a picture.
///
/// Returns `MosaicError::Io` if the file cannot be read or decoded.
pub fn load_picture(path: &Path, bounds: Option<Bounds>) -> Result<Picture, MosaicError> {
    let img = image::open(path).map_err(|e| MosaicError::Io(format!("{}: {e}", path.display())))?;
    picture_from_image(img, bounds)
}
