use cg_core::error::{CoreError, Result};
use cg_core::frame::{PixelGrid, rgb_len};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Calcule les dimensions de sortie. `0` = dimension non spécifiée.
///
/// - `(0, 0)` → dimensions source inchangées.
/// - une seule dimension → l'autre est déduite du ratio source, arrondie.
/// - deux dimensions → utilisées telles quelles.
///
/// # Errors
/// [`CoreError::InvalidDimension`] si la source est vide ou si une dimension
/// calculée tombe à 0.
///
/// # Example
/// ```
/// use cg_source::resize::fit_dimensions;
/// assert_eq!(fit_dimensions(200, 50, 100, 0).unwrap(), (100, 25));
/// assert_eq!(fit_dimensions(200, 50, 0, 10).unwrap(), (40, 10));
/// ```
pub fn fit_dimensions(src_w: u32, src_h: u32, width: u32, height: u32) -> Result<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(CoreError::InvalidDimension {
            width: src_w,
            height: src_h,
        });
    }
    let (w, h) = match (width, height) {
        (0, 0) => (src_w, src_h),
        (0, h) => (scale(h, src_w, src_h), h),
        (w, 0) => (w, scale(w, src_h, src_w)),
        (w, h) => (w, h),
    };
    if w == 0 || h == 0 {
        return Err(CoreError::InvalidDimension {
            width: w,
            height: h,
        });
    }
    Ok((w, h))
}

/// `round(given * other / given_dim)`.
#[inline]
fn scale(given: u32, other: u32, given_dim: u32) -> u32 {
    (f64::from(given) * f64::from(other) / f64::from(given_dim)).round() as u32
}

/// Resizer réutilisable wrappant fast_image_resize (Lanczos3).
///
/// Une instance par conversion suffit ; elle est réutilisée pour chaque frame
/// d'une animation.
///
/// # Example
/// ```
/// use cg_source::resize::Resizer;
/// use cg_core::frame::PixelGrid;
/// let mut r = Resizer::new();
/// let src = PixelGrid::filled(100, 40, (9, 9, 9)).unwrap();
/// let dst = r.resize(src, 50, 0).unwrap();
/// assert_eq!((dst.width(), dst.height()), (50, 20));
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch buffer for the source (fast_image_resize wants `&mut`).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Redimensionne `src` selon le contrat de [`fit_dimensions`].
    ///
    /// Retourne `src` tel quel si les dimensions cibles sont celles de la source.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimension`] (voir [`fit_dimensions`]) ou
    /// [`CoreError::Resize`] si fast_image_resize rejette ses buffers.
    pub fn resize(&mut self, src: PixelGrid, width: u32, height: u32) -> Result<PixelGrid> {
        let (w, h) = fit_dimensions(src.width(), src.height(), width, height)?;
        if (w, h) == (src.width(), src.height()) {
            return Ok(src);
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(src.as_raw());
        let src_image =
            Image::from_slice_u8(src.width(), src.height(), &mut self.src_buf, PixelType::U8x3)
                .map_err(|e| CoreError::Resize(format!("source : {e}")))?;

        let mut dst_data = vec![0u8; rgb_len(w, h)?];
        {
            let mut dst_image = Image::from_slice_u8(w, h, &mut dst_data, PixelType::U8x3)
                .map_err(|e| CoreError::Resize(format!("destination : {e}")))?;
            self.inner
                .resize(&src_image, &mut dst_image, Some(&self.options))
                .map_err(|e| CoreError::Resize(e.to_string()))?;
        }

        log::debug!("Resize {}×{} → {w}×{h}", src.width(), src.height());
        PixelGrid::from_raw(w, h, dst_data)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage (still images).
///
/// # Errors
/// Same as [`Resizer::resize`].
///
/// # Example
/// ```
/// use cg_source::resize::resize;
/// use cg_core::frame::PixelGrid;
/// let src = PixelGrid::filled(200, 50, (0, 0, 0)).unwrap();
/// assert_eq!(resize(src, 100, 0).unwrap().height(), 25);
/// ```
pub fn resize(src: PixelGrid, width: u32, height: u32) -> Result<PixelGrid> {
    Resizer::new().resize(src, width, height)
}
