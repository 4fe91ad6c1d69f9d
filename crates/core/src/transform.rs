//! Block transforms: pixelate and compress.
//!
//! Both tile the picture into `k x k` blocks starting at `(0, 0)` and average
//! each block. Pixelate keeps the input size and paints every block with its
//! average; compress emits one pixel per full block and drops the trailing
//! partial row and column of blocks.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::average::{average_block_with, Divisor};
use crate::error::MosaicError;
use crate::params::{param_string, param_usize};
use crate::picture::Picture;
use crate::rgba::Rgba;

/// Block size used when params omit one.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// All available transform names.
const TRANSFORM_NAMES: &[&str] = &["pixelate", "compress"];

/// Which block transform to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Pixelate,
    Compress,
}

impl Mode {
    /// Parses `"pixelate"` or `"compress"`.
    pub fn from_name(name: &str) -> Result<Mode, MosaicError> {
        match name {
            "pixelate" => Ok(Mode::Pixelate),
            "compress" => Ok(Mode::Compress),
            _ => Err(MosaicError::UnknownTransform(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Pixelate => "pixelate",
            Mode::Compress => "compress",
        }
    }
}

fn check_block_size(k: usize) -> Result<(), MosaicError> {
    if k == 0 {
        return Err(MosaicError::InvalidBlockSize(0));
    }
    Ok(())
}

/// Converts a signed block size from an outer layer, rejecting `k <= 0`.
pub fn block_size_from_signed(k: i64) -> Result<usize, MosaicError> {
    if k <= 0 {
        return Err(MosaicError::InvalidBlockSize(k));
    }
    usize::try_from(k).map_err(|_| MosaicError::InvalidBlockSize(k))
}

/// Replaces every `k x k` block with its average color. Output size equals input size.
///
/// Returns `MosaicError::InvalidBlockSize` if `k == 0`.
pub fn pixelate(picture: &Picture, k: usize) -> Result<Picture, MosaicError> {
    pixelate_with(picture, k, Divisor::InBounds)
}

/// [`pixelate`] with an explicit divisor policy for edge blocks.
pub fn pixelate_with(picture: &Picture, k: usize, divisor: Divisor) -> Result<Picture, MosaicError> {
    check_block_size(k)?;
    let (w, h) = (picture.width(), picture.height());
    let mut pixels = vec![Rgba::TRANSPARENT; w * h];
    for r in (0..h).step_by(k) {
        for c in (0..w).step_by(k) {
            let avg = average_block_with(picture, r, c, k, k, divisor);
            let col_end = (c + k).min(w);
            for rr in r..(r + k).min(h) {
                pixels[rr * w + c..rr * w + col_end].fill(avg);
            }
        }
    }
    Picture::from_pixels(w, h, pixels)
}

/// Downsamples to `floor(width / k) x floor(height / k)`, one averaged pixel per block.
///
/// Blocks that would extend past the last full multiple of `k` are dropped.
/// Returns `MosaicError::InvalidBlockSize` if `k == 0`.
pub fn compress(picture: &Picture, k: usize) -> Result<Picture, MosaicError> {
    compress_with(picture, k, Divisor::InBounds)
}

/// [`compress`] with an explicit divisor policy.
///
/// Only full blocks are emitted, so the policy never changes the result; it
/// is accepted so both transforms share one signature.
pub fn compress_with(picture: &Picture, k: usize, divisor: Divisor) -> Result<Picture, MosaicError> {
    check_block_size(k)?;
    let out_w = picture.width() / k;
    let out_h = picture.height() / k;
    let pixels = (0..out_h)
        .flat_map(|br| (0..out_w).map(move |bc| (br * k, bc * k)))
        .map(|(r, c)| average_block_with(picture, r, c, k, k, divisor))
        .collect();
    Picture::from_pixels(out_w, out_h, pixels)
}

/// A picture-to-picture transform.
///
/// Object-safe so callers can switch transforms at runtime through
/// `Box<dyn Transform>`.
pub trait Transform {
    /// Runs the transform, producing a new picture.
    fn apply(&self, picture: &Picture) -> Result<Picture, MosaicError>;

    /// Registry name of this transform.
    fn name(&self) -> &'static str;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;
}

/// Same-size block averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixelate {
    pub block_size: usize,
    pub divisor: Divisor,
}

/// Reduced-size block averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compress {
    pub block_size: usize,
    pub divisor: Divisor,
}

impl Transform for Pixelate {
    fn apply(&self, picture: &Picture) -> Result<Picture, MosaicError> {
        pixelate_with(picture, self.block_size, self.divisor)
    }

    fn name(&self) -> &'static str {
        Mode::Pixelate.name()
    }

    fn params(&self) -> Value {
        json!({
            "mode": self.name(),
            "block_size": self.block_size,
            "divisor": self.divisor.name(),
        })
    }
}

impl Transform for Compress {
    fn apply(&self, picture: &Picture) -> Result<Picture, MosaicError> {
        compress_with(picture, self.block_size, self.divisor)
    }

    fn name(&self) -> &'static str {
        Mode::Compress.name()
    }

    fn params(&self) -> Value {
        json!({
            "mode": self.name(),
            "block_size": self.block_size,
            "divisor": self.divisor.name(),
        })
    }
}

/// Enumeration of the available transforms.
///
/// Use [`TransformKind::from_name`] or [`TransformKind::from_json`] for
/// string-based construction (CLI, WASM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Pixelate(Pixelate),
    Compress(Compress),
}

impl TransformKind {
    /// Builds a transform from a mode and block size with the default divisor.
    ///
    /// Returns `MosaicError::InvalidBlockSize` if `block_size == 0`.
    pub fn from_mode(mode: Mode, block_size: usize) -> Result<Self, MosaicError> {
        Self::with_divisor(mode, block_size, Divisor::default())
    }

    /// Builds a transform from a mode, block size, and divisor policy.
    pub fn with_divisor(mode: Mode, block_size: usize, divisor: Divisor) -> Result<Self, MosaicError> {
        check_block_size(block_size)?;
        Ok(match mode {
            Mode::Pixelate => TransformKind::Pixelate(Pixelate {
                block_size,
                divisor,
            }),
            Mode::Compress => TransformKind::Compress(Compress {
                block_size,
                divisor,
            }),
        })
    }

    /// Constructs a transform by name.
    ///
    /// Returns `MosaicError::UnknownTransform` if the name is not recognized.
    pub fn from_name(name: &str, block_size: usize) -> Result<Self, MosaicError> {
        Self::from_mode(Mode::from_name(name)?, block_size)
    }

    /// Constructs a transform from a JSON params object.
    ///
    /// Recognized keys: `mode` (default `"pixelate"`), `block_size` (default
    /// [`DEFAULT_BLOCK_SIZE`]) and `divisor` (default `"in_bounds"`). Missing
    /// or mistyped values fall back to defaults; an unknown mode or divisor
    /// name is an error.
    pub fn from_json(params: &Value) -> Result<Self, MosaicError> {
        let mode = Mode::from_name(&param_string(params, "mode", Mode::Pixelate.name()))?;
        let block_size = param_usize(params, "block_size", DEFAULT_BLOCK_SIZE);
        let divisor_name = param_string(params, "divisor", Divisor::InBounds.name());
        let divisor = Divisor::from_name(&divisor_name)
            .ok_or_else(|| MosaicError::UnknownTransform(format!("divisor '{divisor_name}'")))?;
        Self::with_divisor(mode, block_size, divisor)
    }

    /// Returns a slice of all recognized transform names.
    pub fn list_transforms() -> &'static [&'static str] {
        TRANSFORM_NAMES
    }

    pub fn mode(&self) -> Mode {
        match self {
            TransformKind::Pixelate(_) => Mode::Pixelate,
            TransformKind::Compress(_) => Mode::Compress,
        }
    }

    pub fn block_size(&self) -> usize {
        match self {
            TransformKind::Pixelate(t) => t.block_size,
            TransformKind::Compress(t) => t.block_size,
        }
    }
}

impl Transform for TransformKind {
    fn apply(&self, picture: &Picture) -> Result<Picture, MosaicError> {
        match self {
            TransformKind::Pixelate(t) => t.apply(picture),
            TransformKind::Compress(t) => t.apply(picture),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TransformKind::Pixelate(t) => t.name(),
            TransformKind::Compress(t) => t.name(),
        }
    }

    fn params(&self) -> Value {
        match self {
            TransformKind::Pixelate(t) => t.params(),
            TransformKind::Compress(t) => t.params(),
        }
    }
}
