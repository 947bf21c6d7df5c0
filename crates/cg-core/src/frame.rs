use std::time::Duration;

use crate::error::{CoreError, Result};

/// Bytes per pixel in a [`PixelGrid`] (RGB, alpha discarded).
pub const CHANNELS: usize = 3;

/// Taille en bytes d'un buffer RGB `width × height`.
///
/// # Errors
/// [`CoreError::InvalidDimension`] si le produit dépasse `usize`.
pub fn rgb_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(CoreError::InvalidDimension { width, height })
}

/// Grille de pixels RGB décodée, indépendante du format d'origine.
///
/// Stocke les pixels en RGB row-major, 3 bytes par pixel.
/// Immuable une fois produite par le décodeur ou le resizer.
///
/// # Example
/// ```
/// use cg_core::frame::PixelGrid;
/// let grid = PixelGrid::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(grid.pixel(1, 0), (0, 0, 255));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Wrap a raw RGB buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimension`] if either dimension is zero or
    /// if `data.len() != width * height * 3` (or that product overflows).
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = rgb_len(width, height)?;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(CoreError::InvalidDimension { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Grille uniforme d'une seule couleur.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimension`] if either dimension is zero or
    /// the buffer size overflows.
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Result<Self> {
        let data = [rgb.0, rgb.1, rgb.2].repeat(rgb_len(width, height)? / CHANNELS);
        Self::from_raw(width, height, data)
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, row-major.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Accès au pixel (x, y) → (r, g, b).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// One row of RGB bytes (`width * 3` long).
    ///
    /// # Example
    /// ```
    /// use cg_core::frame::PixelGrid;
    /// let grid = PixelGrid::filled(4, 2, (1, 2, 3)).unwrap();
    /// assert_eq!(grid.row(1).len(), 12);
    /// ```
    #[inline]
    #[must_use]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize * CHANNELS)
    }
}

/// Une ligne de terminal prête à écrire : directives couleur + glyphes,
/// terminée par un reset couleur et un saut de ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine(String);

impl RenderedLine {
    /// Wrap an already encoded line.
    #[must_use]
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// Encoded text, escape sequences included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RenderedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One rendered frame. `delay` is zero for still images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Lines top to bottom, one per source row.
    pub lines: Vec<RenderedLine>,
    /// Delay reported by the decoder for this frame.
    pub delay: Duration,
}

/// Ordered frames of one conversion. Length 1 for still images.
///
/// # Example
/// ```
/// use cg_core::frame::{RenderedFrame, Sequence};
/// let seq = Sequence::single(RenderedFrame::default());
/// assert_eq!(seq.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    /// Frames in decode order.
    pub frames: Vec<RenderedFrame>,
}

impl Sequence {
    /// Sequence holding one still frame.
    #[must_use]
    pub fn single(frame: RenderedFrame) -> Self {
        Self {
            frames: vec![frame],
        }
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the source had no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderedFrame> {
        self.frames.iter()
    }
}

impl FromIterator<RenderedFrame> for Sequence {
    fn from_iter<I: IntoIterator<Item = RenderedFrame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a RenderedFrame;
    type IntoIter = std::slice::Iter<'a, RenderedFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_length_mismatch() {
        let err = PixelGrid::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidDimension {
                width: 2,
                height: 2
            }
        ));
    }

    #[test]
    fn from_raw_rejects_zero_area() {
        assert!(PixelGrid::from_raw(0, 5, Vec::new()).is_err());
        assert!(PixelGrid::filled(3, 0, (0, 0, 0)).is_err());
    }

    #[test]
    fn overflowing_size_is_invalid_dimension() {
        for grid in [
            PixelGrid::from_raw(u32::MAX, u32::MAX, Vec::new()),
            PixelGrid::filled(u32::MAX, u32::MAX, (1, 2, 3)),
        ] {
            assert!(matches!(
                grid,
                Err(CoreError::InvalidDimension {
                    width: u32::MAX,
                    height: u32::MAX
                })
            ));
        }
        assert_eq!(rgb_len(4, 5).unwrap(), 60);
    }

    #[test]
    fn rows_walk_top_to_bottom() {
        let data = vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        let grid = PixelGrid::from_raw(2, 2, data).unwrap();
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], grid.row(1));
        assert_eq!(grid.pixel(0, 1), (3, 3, 3));
    }

    #[test]
    fn sequence_collects_in_order() {
        let seq: Sequence = (1..=3u64)
            .map(|ms| RenderedFrame {
                lines: Vec::new(),
                delay: Duration::from_millis(ms),
            })
            .collect();
        let delays: Vec<u64> = seq.iter().map(|f| f.delay.as_millis() as u64).collect();
        assert_eq!(delays, vec![1, 2, 3]);
    }
}
