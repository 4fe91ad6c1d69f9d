//! Brightness quantization to ASCII-art text.
//!
//! Each pixel's luma picks one glyph from a ramp ordered from visually
//! heaviest to lightest. The default ramp has 16 glyphs, so buckets are 16
//! luma values wide.

use crate::error::MosaicError;
use crate::picture::Picture;

/// Default glyph ramp, dense to sparse.
pub const DEFAULT_RAMP: &str = "@%M&8$OACL1!-:; ";

const DEFAULT_GLYPHS: [char; 16] = [
    '@', '%', 'M', '&', '8', '$', 'O', 'A', 'C', 'L', '1', '!', '-', ':', ';', ' ',
];

/// Luma values per bucket in the default ramp (256 / 16).
const BUCKET_WIDTH: u8 = 16;

/// Maps a luma value to its glyph in the default ramp.
///
/// Bucket is `luma / 16`, so 0 maps to `'@'` and 255 to `' '`.
pub fn quantize(luma: u8) -> char {
    DEFAULT_GLYPHS[usize::from(luma / BUCKET_WIDTH)]
}

/// Renders a picture as one string per row using the default ramp.
///
/// Returns exactly `height` strings of exactly `width` characters.
pub fn render_as_text(picture: &Picture) -> Vec<String> {
    picture
        .rows()
        .map(|row| row.iter().map(|px| quantize(px.luma())).collect::<String>())
        .chain(empty_rows(picture))
        .collect()
}

/// Zero-width pictures still render `height` (empty) rows.
fn empty_rows(picture: &Picture) -> impl Iterator<Item = String> {
    let n = if picture.width() == 0 {
        picture.height()
    } else {
        0
    };
    std::iter::repeat(String::new()).take(n)
}

/// An ordered set of glyphs, heaviest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.to_vec(),
        }
    }
}

impl Ramp {
    /// Builds a ramp from a string of 1 to 256 glyphs.
    ///
    /// Returns `MosaicError::InvalidRamp` if the string is empty or longer
    /// than 256 glyphs.
    pub fn new(glyphs: &str) -> Result<Self, MosaicError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(MosaicError::InvalidRamp("ramp must not be empty".into()));
        }
        if glyphs.len() > 256 {
            return Err(MosaicError::InvalidRamp(format!(
                "ramp has {} glyphs, at most 256 allowed",
                glyphs.len()
            )));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Ramps built through [`Ramp::new`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for `luma`, using equal-width buckets over 0..=255.
    pub fn glyph(&self, luma: u8) -> char {
        let bucket = usize::from(luma) * self.glyphs.len() / 256;
        self.glyphs[bucket.min(self.glyphs.len() - 1)]
    }

    /// The ramp as a string.
    pub fn as_string(&self) -> String {
        self.glyphs.iter().collect()
    }
}

/// Renders a picture with a custom ramp. Same shape guarantees as [`render_as_text`].
pub fn render_with_ramp(picture: &Picture, ramp: &Ramp) -> Vec<String> {
    picture
        .rows()
        .map(|row| row.iter().map(|px| ramp.glyph(px.luma())).collect::<String>())
        .chain(empty_rows(picture))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgba::Rgba;

    #[test]
    fn default_ramp_matches_glyph_table() {
        assert_eq!(DEFAULT_RAMP.chars().collect::<Vec<_>>(), DEFAULT_GLYPHS);
    }

    #[test]
    fn darkest_and_lightest_boundaries() {
        assert_eq!(quantize(0), '@');
        assert_eq!(quantize(255), ' ');
    }

    #[test]
    fn bucket_boundary_at_sixteen() {
        assert_eq!(quantize(15), '@');
        assert_eq!(quantize(16), '%');
        assert_ne!(quantize(15), quantize(16));
    }

    #[test]
    fn transparent_pixel_renders_as_lightest() {
        let pic = Picture::filled(2, 1, Rgba::new(0, 0, 0, 0)).unwrap();
        assert_eq!(render_as_text(&pic), vec!["  ".to_string()]);
    }

    #[test]
    fn render_shape_matches_picture() {
        let pic = Picture::filled(7, 3, Rgba::opaque(128, 64, 32)).unwrap();
        let rows = render_as_text(&pic);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.chars().count() == 7));
    }

    #[test]
    fn zero_width_picture_renders_empty_rows() {
        let pic = Picture::filled(0, 4, Rgba::TRANSPARENT).unwrap();
        assert_eq!(render_as_text(&pic), vec![String::new(); 4]);
    }

    #[test]
    fn render_uses_column_order() {
        let pic = Picture::from_pixels(
            3,
            1,
            vec![
                Rgba::opaque(0, 0, 0),
                Rgba::opaque(255, 255, 255),
                Rgba::new(9, 9, 9, 0),
            ],
        )
        .unwrap();
        assert_eq!(render_as_text(&pic), vec!["@  ".to_string()]);
    }

    #[test]
    fn default_ramp_agrees_with_quantize() {
        let ramp = Ramp::default();
        for luma in 0..=255u8 {
            assert_eq!(ramp.glyph(luma), quantize(luma), "luma {luma}");
        }
    }

    #[test]
    fn custom_ramp_two_glyphs_splits_at_128() {
        let ramp = Ramp::new("#.").unwrap();
        assert_eq!(ramp.glyph(127), '#');
        assert_eq!(ramp.glyph(128), '.');
    }

    #[test]
    fn single_glyph_ramp_always_returns_it() {
        let ramp = Ramp::new("x").unwrap();
        assert_eq!(ramp.glyph(0), 'x');
        assert_eq!(ramp.glyph(255), 'x');
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert!(matches!(Ramp::new(""), Err(MosaicError::InvalidRamp(_))));
    }

    #[test]
    fn render_with_ramp_shape() {
        let pic = Picture::filled(4, 2, Rgba::opaque(10, 10, 10)).unwrap();
        let rows = render_with_ramp(&pic, &Ramp::new("ab").unwrap());
        assert_eq!(rows, vec!["aaaa".to_string(), "aaaa".to_string()]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn quantize_is_monotonic(a: u8, b: u8) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let pos = |c: char| DEFAULT_RAMP.chars().position(|g| g == c);
                prop_assert!(pos(quantize(lo)) <= pos(quantize(hi)));
            }

            #[test]
            fn text_shape_matches_dimensions(w in 0_usize..=24, h in 0_usize..=24, c in any::<[u8; 4]>()) {
                let pic = Picture::filled(w, h, Rgba::from(c)).unwrap();
                let rows = render_as_text(&pic);
                prop_assert_eq!(rows.len(), h);
                prop_assert!(rows.iter().all(|r| r.chars().count() == w));
            }
        }
    }
}
