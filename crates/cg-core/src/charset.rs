use std::sync::LazyLock;

/// 70 caractères — Paul Bourke extended, du plus clair au plus dense.
pub const GLYPH_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Number of glyphs in [`GLYPH_RAMP`].
pub const GLYPH_RAMP_LEN: usize = 70;

/// Process-wide lookup table over [`GLYPH_RAMP`], built on first use.
pub static RAMP_LUT: LazyLock<LuminanceLut> = LazyLock::new(|| LuminanceLut::new(GLYPH_RAMP));

/// Lookup table mapping a gray level [0..255] → glyph.
///
/// Pre-computed once, O(1) per pixel. Index formula:
/// `gray * (len - 1) / 255` (integer division, floor).
///
/// # Example
/// ```
/// use cg_core::charset::LuminanceLut;
/// let lut = LuminanceLut::new(" .:#@");
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct LuminanceLut {
    chars: Vec<char>,
    index: [u8; 256],
}

impl LuminanceLut {
    /// Build a LUT from a charset ordered lightest→densest.
    ///
    /// Charsets shorter than 2 glyphs (or longer than 256) fall back to `" @"`.
    #[must_use]
    pub fn new(charset: &str) -> Self {
        let chars: Vec<char> = charset.chars().collect();
        if !(2..=256).contains(&chars.len()) {
            return Self::new(" @");
        }
        let len = chars.len();
        let mut index = [0u8; 256];
        for (gray, slot) in index.iter_mut().enumerate() {
            *slot = (gray * (len - 1) / 255) as u8;
        }
        Self { chars, index }
    }

    /// Position of the glyph chosen for `gray` inside the charset.
    ///
    /// # Example
    /// ```
    /// use cg_core::charset::RAMP_LUT;
    /// assert_eq!(RAMP_LUT.index(76), 20);
    /// assert_eq!(RAMP_LUT.index(29), 7);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, gray: u8) -> usize {
        usize::from(self.index[usize::from(gray)])
    }

    /// Map a gray level [0..255] to a glyph.
    ///
    /// # Example
    /// ```
    /// use cg_core::charset::LuminanceLut;
    /// let lut = LuminanceLut::new(" .:#@");
    /// assert_eq!(lut.map(128), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, gray: u8) -> char {
        self.chars[self.index(gray)]
    }

    /// Glyphs of the charset, lightest first.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_seventy_glyphs() {
        assert_eq!(GLYPH_RAMP.chars().count(), GLYPH_RAMP_LEN);
        assert_eq!(RAMP_LUT.glyphs().len(), GLYPH_RAMP_LEN);
    }

    #[test]
    fn luminance_lut_maps_extremes() {
        assert_eq!(RAMP_LUT.map(0), ' ');
        assert_eq!(RAMP_LUT.map(255), '$');
        assert_eq!(RAMP_LUT.index(255), GLYPH_RAMP_LEN - 1);
    }

    #[test]
    fn luminance_lut_monotonic() {
        let mut prev_idx = 0usize;
        for gray in 0..=255u8 {
            let idx = RAMP_LUT.index(gray);
            assert!(idx >= prev_idx, "LUT non monotone à luminance {gray}");
            assert_eq!(RAMP_LUT.glyphs()[idx], RAMP_LUT.map(gray));
            prev_idx = idx;
        }
    }

    #[test]
    fn short_charset_falls_back() {
        let lut = LuminanceLut::new("#");
        assert_eq!(lut.map(0), ' ');
        assert_eq!(lut.map(255), '@');
    }
}
