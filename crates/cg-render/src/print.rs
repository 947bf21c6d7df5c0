use std::io::{self, BufWriter, Write};

use cg_core::error::Result;
use cg_core::frame::Sequence;

/// Écrit une image fixe une seule fois : toutes les lignes, puis flush.
///
/// Aucun contrôle du curseur ; chaque ligne porte déjà son reset couleur.
/// Seule la première frame est écrite si la séquence en contient plusieurs.
///
/// # Errors
/// Erreur d'écriture sur `out`.
///
/// # Example
/// ```
/// use cg_core::frame::{RenderedFrame, RenderedLine, Sequence};
/// use cg_render::print::print_image;
///
/// let seq = Sequence::single(RenderedFrame {
///     lines: vec![RenderedLine::new("ab\n".into())],
///     ..Default::default()
/// });
/// let mut out = Vec::new();
/// print_image(&mut out, &seq).unwrap();
/// assert_eq!(out, b"ab\n");
/// ```
pub fn print_image<W: Write>(mut out: W, seq: &Sequence) -> Result<()> {
    if seq.len() > 1 {
        log::warn!(
            "Image fixe attendue, {} frames reçues : seule la première est affichée",
            seq.len()
        );
    }
    if let Some(frame) = seq.frames.first() {
        for line in &frame.lines {
            out.write_all(line.as_str().as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// [`print_image`] sur la sortie standard.
///
/// # Errors
/// Erreur d'écriture sur stdout.
pub fn print_image_stdout(seq: &Sequence) -> Result<()> {
    print_image(BufWriter::new(io::stdout().lock()), seq)
}
