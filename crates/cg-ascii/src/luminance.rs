use cg_core::charset::RAMP_LUT;

/// Luminance ITU-R BT.601 d'un pixel, dans [0.0, 255.0].
///
/// # Example
/// ```
/// use cg_ascii::luminance::luminance;
/// assert_eq!(luminance(0, 0, 0), 0.0);
/// assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-9);
/// ```
#[inline(always)]
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Niveau de gris entier : luminance tronquée (pas arrondie).
///
/// # Example
/// ```
/// use cg_ascii::luminance::gray_level;
/// assert_eq!(gray_level(255, 0, 0), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    luminance(r, g, b) as u8
}

/// Glyphe de la rampe pour un niveau de gris : 0 → plus clair, 255 → plus dense.
///
/// # Example
/// ```
/// use cg_ascii::luminance::select_glyph;
/// assert_eq!(select_glyph(0), ' ');
/// assert_eq!(select_glyph(255), '$');
/// ```
#[inline(always)]
#[must_use]
pub fn select_glyph(gray: u8) -> char {
    RAMP_LUT.map(gray)
}

/// Index of the glyph chosen for `gray` in the ramp.
#[inline(always)]
#[must_use]
pub fn glyph_index(gray: u8) -> usize {
    RAMP_LUT.index(gray)
}
