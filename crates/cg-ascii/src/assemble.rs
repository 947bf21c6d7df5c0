use std::time::Duration;

use cg_core::error::Result;
use cg_core::frame::{PixelGrid, RenderedFrame, Sequence};
use cg_source::animation::{AnimationFrame, load_animation};
use cg_source::image::load_image;
use cg_source::path::expand_path;
use cg_source::resize::{Resizer, resize};

use crate::line::render_grid;

/// Convertit une image fixe en séquence d'une seule frame (délai nul).
///
/// `path` est expansé (`$VAR`), `width` / `height` valent 0 quand non
/// spécifiés (voir `cg_source::resize::fit_dimensions`).
///
/// # Errors
/// Erreurs de décodage ou de redimensionnement, propagées telles quelles.
///
/// # Example
/// ```no_run
/// use cg_ascii::assemble::assemble_image;
/// let seq = assemble_image("$HOME/cat.png", 80, 0).unwrap();
/// assert_eq!(seq.len(), 1);
/// ```
pub fn assemble_image(path: &str, width: u32, height: u32) -> Result<Sequence> {
    let path = expand_path(path);
    let grid = resize(load_image(&path)?, width, height)?;
    log::debug!(
        "Image assemblée : {} ({}×{})",
        path,
        grid.width(),
        grid.height()
    );
    Ok(Sequence::single(render_frame(&grid, Duration::ZERO)))
}

/// Convertit une animation (GIF) en séquence de frames temporisées.
///
/// # Errors
/// La première erreur (décodage, redimensionnement) interrompt toute la
/// conversion ; aucune séquence partielle n'est retournée.
///
/// # Example
/// ```no_run
/// use cg_ascii::assemble::assemble_animation;
/// let seq = assemble_animation("anim.gif", 0, 40).unwrap();
/// println!("{} frames", seq.len());
/// ```
pub fn assemble_animation(path: &str, width: u32, height: u32) -> Result<Sequence> {
    let path = expand_path(path);
    let frames = load_animation(&path)?;
    let seq = assemble_frames(frames, width, height)?;
    log::debug!("Animation assemblée : {} ({} frames)", path, seq.len());
    Ok(seq)
}

/// Resize + render chaque frame, dans l'ordre, en conservant son délai.
///
/// # Errors
/// Fail-fast sur la première frame qui ne peut pas être redimensionnée.
pub fn assemble_frames<I>(frames: I, width: u32, height: u32) -> Result<Sequence>
where
    I: IntoIterator<Item = AnimationFrame>,
{
    let mut resizer = Resizer::new();
    frames
        .into_iter()
        .map(|frame| {
            let grid = resizer.resize(frame.grid, width, height)?;
            Ok(render_frame(&grid, frame.delay))
        })
        .collect::<Result<Vec<_>>>()
        .map(|frames| Sequence { frames })
}

/// Render every row of an already sized grid into one frame.
#[must_use]
pub fn render_frame(grid: &PixelGrid, delay: Duration) -> RenderedFrame {
    RenderedFrame {
        lines: render_grid(grid),
        delay,
    }
}
