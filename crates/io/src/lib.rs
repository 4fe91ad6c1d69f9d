#![deny(unsafe_code)]
//! Image-loading and rendering collaborators for pixel-mosaic.
//!
//! `mosaic-core` only sees raster buffers. This crate decodes image files into
//! a [`Picture`](mosaic_core::Picture) (optionally shrunk to fit a bounding
//! box) and writes results back out as PNG or plain text.

pub mod load;
pub mod text;

#[cfg(feature = "png")]
pub mod snapshot;

pub use load::{load_picture, picture_from_image, Bounds};
