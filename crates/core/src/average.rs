//! Block averaging: mean color of a rectangular region of a [`Picture`].
//!
//! Regions are clipped to the picture bounds, so blocks along the right and
//! bottom edges may cover fewer pixels than requested.

use serde::{Deserialize, Serialize};

use crate::picture::Picture;
use crate::rgba::{ChannelSum, Rgba};

/// What a block sum is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Divisor {
    /// Divide by the number of in-bounds pixels actually summed.
    #[default]
    InBounds,
    /// Divide by the requested `block_width * block_height`, even for clipped
    /// edge blocks. Missing pixels act as zeros and darken the edge.
    NominalArea,
}

impl Divisor {
    /// Parses `"in_bounds"` or `"nominal_area"`.
    pub fn from_name(name: &str) -> Option<Divisor> {
        match name {
            "in_bounds" => Some(Divisor::InBounds),
            "nominal_area" => Some(Divisor::NominalArea),
            _ => None,
        }
    }

    /// The serialized name of this policy.
    pub fn name(self) -> &'static str {
        match self {
            Divisor::InBounds => "in_bounds",
            Divisor::NominalArea => "nominal_area",
        }
    }
}

/// Sums the clipped region `[row, row + block_height) x [col, col + block_width)`.
pub fn sum_block(
    picture: &Picture,
    row: usize,
    col: usize,
    block_width: usize,
    block_height: usize,
) -> ChannelSum {
    debug_assert!(
        row < picture.height() && col < picture.width(),
        "block origin ({row}, {col}) outside {}x{} picture",
        picture.width(),
        picture.height()
    );
    let row_end = row.saturating_add(block_height).min(picture.height());
    let col_end = col.saturating_add(block_width).min(picture.width());
    (row..row_end)
        .flat_map(move |r| picture.row(r)[col..col_end].iter())
        .sum()
}

/// Mean color of the clipped block, divided by the in-bounds pixel count.
///
/// The caller must guarantee `row < height` and `col < width`; this is
/// checked only in debug builds.
pub fn average_block(
    picture: &Picture,
    row: usize,
    col: usize,
    block_width: usize,
    block_height: usize,
) -> Rgba {
    average_block_with(picture, row, col, block_width, block_height, Divisor::InBounds)
}

/// Mean color of the clipped block using the given divisor policy.
pub fn average_block_with(
    picture: &Picture,
    row: usize,
    col: usize,
    block_width: usize,
    block_height: usize,
    divisor: Divisor,
) -> Rgba {
    let sum = sum_block(picture, row, col, block_width, block_height);
    match divisor {
        Divisor::InBounds => sum.mean(),
        Divisor::NominalArea => {
            let area = (block_width as u64).saturating_mul(block_height as u64);
            sum.divide(area)
        }
    }
}
