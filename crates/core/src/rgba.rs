//! RGBA pixel value and the wide accumulator used for block sums.
//!
//! [`Rgba`] is an immutable 8-bit-per-channel value with a derived luma.
//! Sums over many pixels go through [`ChannelSum`], which keeps `u64`
//! channels so that no realistic block can overflow.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Luma weights for red, green, and blue.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// A single RGBA pixel with a precomputed luma.
///
/// Luma is `floor(0.299 R + 0.587 G + 0.114 B)`, except that a fully
/// transparent pixel (alpha 0) is treated as white background and gets
/// luma 255 regardless of its color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    channels: [u8; 4],
    luma: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba {
        channels: [0, 0, 0, 0],
        luma: 255,
    };

    /// Creates a pixel and derives its luma.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            channels: [r, g, b, a],
            luma: luma_of(r, g, b, a),
        }
    }

    /// Creates an opaque pixel.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a pixel from `[r, g, b, a]`.
    pub fn from_channels(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self::new(r, g, b, a)
    }

    pub fn r(self) -> u8 {
        self.channels[0]
    }

    pub fn g(self) -> u8 {
        self.channels[1]
    }

    pub fn b(self) -> u8 {
        self.channels[2]
    }

    pub fn a(self) -> u8 {
        self.channels[3]
    }

    /// The four channels in R, G, B, A order.
    pub fn channels(self) -> [u8; 4] {
        self.channels
    }

    /// Derived brightness in 0..=255.
    pub fn luma(self) -> u8 {
        self.luma
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(channels: [u8; 4]) -> Self {
        Rgba::from_channels(channels)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        px.channels
    }
}

fn luma_of(r: u8, g: u8, b: u8, a: u8) -> u8 {
    if a == 0 {
        return 255;
    }
    let y = LUMA_WEIGHTS[0] * f64::from(r)
        + LUMA_WEIGHTS[1] * f64::from(g)
        + LUMA_WEIGHTS[2] * f64::from(b);
    // Weights sum to 1.0, so the floor stays within u8 range.
    y.floor().clamp(0.0, 255.0) as u8
}

/// Per-channel running sum of pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSum {
    channels: [u64; 4],
    count: u64,
}

impl ChannelSum {
    /// An empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pixels summed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Raw channel totals in R, G, B, A order.
    pub fn totals(&self) -> [u64; 4] {
        self.channels
    }

    /// Divides each channel total by `divisor` with floor division.
    ///
    /// A zero divisor yields [`Rgba::TRANSPARENT`]; callers never request an
    /// empty block, so this only guards the arithmetic.
    pub fn divide(&self, divisor: u64) -> Rgba {
        if divisor == 0 {
            return Rgba::TRANSPARENT;
        }
        let c = self.channels.map(|total| (total / divisor).min(255) as u8);
        Rgba::from_channels(c)
    }

    /// Mean over the pixels actually summed.
    pub fn mean(&self) -> Rgba {
        self.divide(self.count)
    }
}

impl Add<Rgba> for ChannelSum {
    type Output = ChannelSum;

    fn add(self, px: Rgba) -> ChannelSum {
        let mut channels = self.channels;
        for (total, c) in channels.iter_mut().zip(px.channels) {
            *total += u64::from(c);
        }
        ChannelSum {
            channels,
            count: self.count + 1,
        }
    }
}

impl<'a> std::iter::Sum<&'a Rgba> for ChannelSum {
    fn sum<I: Iterator<Item = &'a Rgba>>(iter: I) -> Self {
        iter.fold(ChannelSum::new(), |acc, &px| acc + px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_opaque_has_zero_luma() {
        assert_eq!(Rgba::opaque(0, 0, 0).luma(), 0);
    }

    #[test]
    fn transparent_pixel_has_white_luma() {
        assert_eq!(Rgba::new(0, 0, 0, 0).luma(), 255);
        assert_eq!(Rgba::new(10, 20, 30, 0).luma(), 255);
    }

    #[test]
    fn luma_uses_weighted_floor() {
        // 0.299 * 100 = 29.9 -> 29
        assert_eq!(Rgba::opaque(100, 0, 0).luma(), 29);
        // 0.587 * 100 = 58.7 -> 58
        assert_eq!(Rgba::opaque(0, 100, 0).luma(), 58);
        // 0.114 * 100 = 11.4 -> 11
        assert_eq!(Rgba::opaque(0, 0, 100).luma(), 11);
    }

    #[test]
    fn luma_is_independent_of_nonzero_alpha() {
        assert_eq!(Rgba::new(90, 90, 90, 1).luma(), Rgba::opaque(90, 90, 90).luma());
    }

    #[test]
    fn accessors_return_channels() {
        let px = Rgba::new(1, 2, 3, 4);
        assert_eq!((px.r(), px.g(), px.b(), px.a()), (1, 2, 3, 4));
        assert_eq!(px.channels(), [1, 2, 3, 4]);
    }

    #[test]
    fn sum_accumulates_and_counts() {
        let sum = ChannelSum::new() + Rgba::new(10, 20, 30, 40) + Rgba::new(1, 2, 3, 4);
        assert_eq!(sum.totals(), [11, 22, 33, 44]);
        assert_eq!(sum.count(), 2);
    }

    #[test]
    fn divide_floors_each_channel() {
        let sum = ChannelSum::new() + Rgba::new(255, 255, 255, 255) + Rgba::new(0, 0, 0, 0);
        assert_eq!(sum.mean(), Rgba::new(127, 127, 127, 127));
    }

    #[test]
    fn divide_by_zero_is_transparent() {
        assert_eq!(ChannelSum::new().mean(), Rgba::TRANSPARENT);
    }

    #[test]
    fn sum_does_not_overflow_on_large_blocks() {
        let px = Rgba::opaque(255, 255, 255);
        let sum: ChannelSum = std::iter::repeat(&px).take(100_000).sum();
        assert_eq!(sum.totals()[0], 255 * 100_000);
        assert_eq!(sum.mean(), px);
    }

    #[test]
    fn serde_round_trip_as_channel_array() {
        let px = Rgba::new(5, 6, 7, 0);
        let json = serde_json::to_string(&px).unwrap();
        assert_eq!(json, "[5,6,7,0]");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, px);
        assert_eq!(back.luma(), 255);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn luma_never_exceeds_max_channel(r: u8, g: u8, b: u8) {
                let px = Rgba::opaque(r, g, b);
                prop_assert!(px.luma() <= r.max(g).max(b));
            }

            #[test]
            fn mean_of_repeated_pixel_is_that_pixel(r: u8, g: u8, b: u8, a: u8, n in 1_usize..64) {
                let px = Rgba::new(r, g, b, a);
                let sum: ChannelSum = std::iter::repeat(&px).take(n).sum();
                prop_assert_eq!(sum.mean(), px);
            }
        }
    }
}
