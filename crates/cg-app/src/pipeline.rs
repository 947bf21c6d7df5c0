use anyhow::{Context, Result};
use cg_ascii::assemble::{assemble_animation, assemble_image};
use cg_core::frame::Sequence;
use cg_source::image::is_animated;
use cg_source::path::expand_path;

use crate::cli::Cli;

/// Kind of conversion chosen for the input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Printed once.
    Still,
    /// Replayed with per-frame timing.
    Animation,
}

/// Détecte le mode à partir du contenu du fichier (pas de l'extension).
///
/// # Errors
/// Returns an error if the file cannot be opened.
pub fn detect_mode(path: &str, force_still: bool) -> Result<Mode> {
    if force_still {
        return Ok(Mode::Still);
    }
    let expanded = expand_path(path);
    let animated =
        is_animated(&expanded).with_context(|| format!("Impossible d'ouvrir {expanded}"))?;
    Ok(if animated { Mode::Animation } else { Mode::Still })
}

/// Convert the CLI input into a rendered sequence.
///
/// # Errors
/// Returns the first decode / resize error, with the path as context.
pub fn convert(cli: &Cli) -> Result<(Mode, Sequence)> {
    let mode = detect_mode(&cli.path, cli.still)?;
    let config = cli.convert_config();
    let seq = match mode {
        Mode::Still => assemble_image(&cli.path, config.width, config.height),
        Mode::Animation => assemble_animation(&cli.path, config.width, config.height),
    }
    .with_context(|| format!("Conversion impossible : {}", cli.path))?;
    log::info!("{mode:?} : {} frame(s)", seq.len());
    Ok((mode, seq))
}

/// Convert then display: one-shot print for stills, timed loop for GIFs.
///
/// # Errors
/// Conversion errors, or a terminal write failure.
pub fn run(cli: &Cli) -> Result<()> {
    let (mode, seq) = convert(cli)?;
    match mode {
        Mode::Still => cg_render::print_image_stdout(&seq)?,
        Mode::Animation => cg_render::play(&seq, cli.playback_config().loops)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgba, RgbaImage};

    fn write_gif(path: &std::path::Path, n: usize) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        let frames = (0..n).map(|i| {
            let v = (i * 40) as u8;
            Frame::from_parts(
                RgbaImage::from_pixel(6, 6, Rgba([v, v, 255, 255])),
                0,
                0,
                Delay::from_numer_denom_ms(50, 1),
            )
        });
        encoder.encode_frames(frames).unwrap();
    }

    #[test]
    fn gif_is_played_png_is_printed() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("a.gif");
        let png = dir.path().join("b.png");
        write_gif(&gif, 2);
        RgbaImage::new(2, 2).save(&png).unwrap();

        assert_eq!(
            detect_mode(gif.to_str().unwrap(), false).unwrap(),
            Mode::Animation
        );
        assert_eq!(detect_mode(gif.to_str().unwrap(), true).unwrap(), Mode::Still);
        assert_eq!(detect_mode(png.to_str().unwrap(), false).unwrap(), Mode::Still);
    }

    #[test]
    fn convert_animation_keeps_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("a.gif");
        write_gif(&gif, 3);
        let cli = Cli::try_parse_from(["chromaglyph", gif.to_str().unwrap(), "-w", "3"]).unwrap();

        let (mode, seq) = convert(&cli).unwrap();
        assert_eq!(mode, Mode::Animation);
        assert_eq!(seq.len(), 3);
        assert!(seq.iter().all(|f| f.lines.len() == 3));
    }

    #[test]
    fn convert_still_forced_on_gif() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("a.gif");
        write_gif(&gif, 3);
        let cli = Cli::try_parse_from(["chromaglyph", gif.to_str().unwrap(), "--still"]).unwrap();

        let (mode, seq) = convert(&cli).unwrap();
        assert_eq!(mode, Mode::Still);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.frames[0].lines.len(), 6);
    }

    #[test]
    fn missing_file_keeps_error_kind() {
        let cli = Cli::try_parse_from(["chromaglyph", "/nope/x.png", "--still"]).unwrap();
        let err = convert(&cli).unwrap_err();
        let core = err.downcast_ref::<cg_core::CoreError>().unwrap();
        assert!(matches!(core, cg_core::CoreError::SourceNotFound { .. }));
    }
}
