use std::io::ErrorKind;
use std::path::Path;

use cg_core::error::{CoreError, Result};
use cg_core::frame::PixelGrid;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

/// Charge une image fixe depuis le disque (première frame pour un GIF).
///
/// Le format est détecté par le contenu ; l'extension ne sert qu'en repli.
///
/// `path` doit déjà être expansé (voir [`crate::path::expand_path`]).
/// Le canal alpha est ignoré.
///
/// # Errors
/// [`CoreError::SourceNotFound`] si le fichier n'existe pas,
/// [`CoreError::Decode`] si le contenu n'est pas une image reconnue,
/// [`CoreError::InvalidDimension`] pour une image vide.
///
/// # Example
/// ```no_run
/// use cg_source::image::load_image;
/// let grid = load_image("test.png").unwrap();
/// ```
pub fn load_image(path: &str) -> Result<PixelGrid> {
    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| io_error(path, e))?
        .decode()
        .map_err(|e| decode_error(path, e))?;
    log::debug!("Image chargée : {path} ({}×{})", img.width(), img.height());
    grid_from_dynamic(img)
}

/// `true` si le fichier est un conteneur animé (GIF), détecté par contenu.
///
/// # Errors
/// [`CoreError::SourceNotFound`] / [`CoreError::Decode`] si le fichier ne
/// peut pas être lu.
pub fn is_animated(path: &str) -> Result<bool> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| io_error(path, e))?;
    let format = reader
        .format()
        .or_else(|| ImageFormat::from_path(Path::new(path)).ok());
    Ok(format == Some(ImageFormat::Gif))
}

/// Convert any decoded image into an RGB grid, dropping alpha.
///
/// # Errors
/// [`CoreError::InvalidDimension`] for a zero-area image.
pub fn grid_from_dynamic(img: DynamicImage) -> Result<PixelGrid> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelGrid::from_raw(width, height, rgb.into_raw())
}

/// Map a decoder error onto the pipeline error kinds.
pub(crate) fn decode_error(path: &str, err: ImageError) -> CoreError {
    match err {
        ImageError::IoError(io) => io_error(path, io),
        other => CoreError::Decode {
            path: path.to_owned(),
            source: Box::new(other),
        },
    }
}

pub(crate) fn io_error(path: &str, err: std::io::Error) -> CoreError {
    if err.kind() == ErrorKind::NotFound {
        CoreError::SourceNotFound {
            path: path.to_owned(),
        }
    } else {
        CoreError::Decode {
            path: path.to_owned(),
            source: Box::new(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn missing_file_is_source_not_found() {
        let err = load_image("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, CoreError::SourceNotFound { .. }));
    }

    #[test]
    fn garbage_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"certainly not a png").unwrap();
        let err = load_image(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn png_roundtrip_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 0]));
        img.save(&path).unwrap();

        let grid = load_image(path.to_str().unwrap()).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.pixel(2, 1), (10, 20, 30));
        assert_eq!(grid.as_raw().len(), 3 * 2 * 3);
    }

    #[test]
    fn format_comes_from_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pic", "pic.dat", "pic.gif"] {
            let path = dir.path().join(name);
            let mut bytes = std::io::Cursor::new(Vec::new());
            RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]))
                .write_to(&mut bytes, ImageFormat::Png)
                .unwrap();
            std::fs::write(&path, bytes.into_inner()).unwrap();

            let path = path.to_str().unwrap();
            assert!(!is_animated(path).unwrap(), "{name} détecté animé");
            let grid = load_image(path).unwrap();
            assert_eq!((grid.width(), grid.height()), (3, 3));
            assert_eq!(grid.pixel(1, 1), (1, 2, 3));
        }
    }

    #[test]
    fn png_is_not_animated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        RgbaImage::new(1, 1).save(&path).unwrap();
        assert!(!is_animated(path.to_str().unwrap()).unwrap());
    }

    #[test]
    fn animation_check_on_missing_file() {
        let err = is_animated("/definitely/not/here.gif").unwrap_err();
        assert!(matches!(err, CoreError::SourceNotFound { .. }));
    }
}
