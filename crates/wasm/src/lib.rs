#![deny(unsafe_code)]
//! WASM bindings for pixel-mosaic.
//!
//! A [`Mosaic`] holds one decoded picture, built from the bytes of a canvas
//! `ImageData`. Transforms hand back fresh RGBA byte buffers for
//! `putImageData`; the text rendering comes back as newline-separated rows
//! for `fillText`. Loading a new image means constructing a new handle.

use mosaic_core::transform::block_size_from_signed;
use mosaic_core::{compress, fit_size, pixelate, render_as_text, MosaicError, Picture};
use wasm_bindgen::prelude::*;

fn to_js(e: MosaicError) -> JsError {
    JsError::new(&e.to_string())
}

/// A loaded picture plus the operations the page can run on it.
#[wasm_bindgen]
pub struct Mosaic {
    picture: Picture,
}

#[wasm_bindgen]
impl Mosaic {
    /// Builds a picture from interleaved RGBA bytes (`ImageData.data`).
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8], width: u32, height: u32) -> Result<Mosaic, JsError> {
        let picture = Picture::from_raster(data, width as usize, height as usize).map_err(to_js)?;
        Ok(Mosaic { picture })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.picture.width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.picture.height() as u32
    }

    /// The unmodified picture, for redrawing before a new transform.
    pub fn raster(&self) -> Vec<u8> {
        self.picture.to_raster()
    }

    /// Pixelated RGBA bytes at the original size.
    pub fn pixelate(&self, block_size: i32) -> Result<Vec<u8>, JsError> {
        let k = block_size_from_signed(i64::from(block_size)).map_err(to_js)?;
        Ok(pixelate(&self.picture, k).map_err(to_js)?.to_raster())
    }

    /// Compressed RGBA bytes of size `compressed_width x compressed_height`.
    pub fn compress(&self, block_size: i32) -> Result<Vec<u8>, JsError> {
        let k = block_size_from_signed(i64::from(block_size)).map_err(to_js)?;
        Ok(compress(&self.picture, k).map_err(to_js)?.to_raster())
    }

    /// Width of the [`Mosaic::compress`] output for `block_size`.
    pub fn compressed_width(&self, block_size: i32) -> Result<u32, JsError> {
        let k = block_size_from_signed(i64::from(block_size)).map_err(to_js)?;
        Ok((self.picture.width() / k) as u32)
    }

    /// Height of the [`Mosaic::compress`] output for `block_size`.
    pub fn compressed_height(&self, block_size: i32) -> Result<u32, JsError> {
        let k = block_size_from_signed(i64::from(block_size)).map_err(to_js)?;
        Ok((self.picture.height() / k) as u32)
    }

    /// ASCII rendering, one row per line.
    pub fn to_text(&self) -> String {
        render_as_text(&self.picture).join("\n")
    }
}

/// Fits `natural_width x natural_height` inside the bounding box.
///
/// Returns `[width, height]` in fractional pixels.
#[wasm_bindgen(js_name = fitSize)]
pub fn fit_size_js(
    natural_width: f64,
    natural_height: f64,
    max_width: f64,
    max_height: f64,
) -> Result<Vec<f64>, JsError> {
    let fit = fit_size(natural_width, natural_height, max_width, max_height).map_err(to_js)?;
    Ok(vec![fit.width, fit.height])
}
