use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use cg_core::error::Result;
use cg_core::frame::PixelGrid;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Delay, DynamicImage};

use crate::image::{decode_error, grid_from_dynamic, io_error};

/// Une frame décodée d'une animation, avec son délai natif.
#[derive(Clone, Debug)]
pub struct AnimationFrame {
    /// Pixels de la frame, composités sur le canevas complet.
    pub grid: PixelGrid,
    /// Délai exprimé dans l'unité du conteneur (centièmes de seconde pour
    /// un GIF), porté tel quel dans une `Duration` en millisecondes.
    pub delay: Duration,
}

/// Décode toutes les frames d'un GIF, dans l'ordre du fichier.
///
/// Un GIF sans frame donne un vecteur vide.
///
/// # Errors
/// [`cg_core::CoreError::SourceNotFound`] si le fichier n'existe pas,
/// [`cg_core::CoreError::Decode`] si ce n'est pas un GIF valide.
///
/// # Example
/// ```no_run
/// use cg_source::animation::load_animation;
/// let frames = load_animation("anim.gif").unwrap();
/// println!("{} frames", frames.len());
/// ```
pub fn load_animation(path: &str) -> Result<Vec<AnimationFrame>> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| decode_error(path, e))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| decode_error(path, e))?;

    log::debug!("Animation décodée : {path} ({} frames)", frames.len());

    frames
        .into_iter()
        .map(|frame| {
            let delay = native_delay(frame.delay());
            let grid = grid_from_dynamic(DynamicImage::ImageRgba8(frame.into_buffer()))?;
            Ok(AnimationFrame { grid, delay })
        })
        .collect()
}

/// `image` reports GIF delays in milliseconds (centiseconds × 10); undo the
/// scaling to recover the container's native unit.
fn native_delay(delay: Delay) -> Duration {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return Duration::ZERO;
    }
    let millis = u64::from(numer) / u64::from(denom);
    Duration::from_millis(millis / 10)
}
