use std::fmt::Write as _;

use cg_core::frame::{CHANNELS, PixelGrid, RenderedLine};

use crate::luminance::{gray_level, select_glyph};

/// Fond fixe (noir RGB) devant chaque glyphe.
const BACKGROUND: &str = "\x1b[48;2;0;0;0m";

/// Reset couleur en fin de ligne.
const RESET: &str = "\x1b[0m";

/// Octets max par pixel : fond (15) + `ESC[38;2;255;255;255m` (19) + 2 glyphes ASCII.
const BYTES_PER_PIXEL: usize = 36;

/// Encode une ligne RGB (3 octets par pixel) en ligne de terminal truecolor.
///
/// Chaque pixel devient : fond noir, avant-plan à la couleur d'origine,
/// puis le glyphe répété deux fois (cellule ~carrée). La ligne se termine
/// par un reset couleur et `\n`.
///
/// Les directives sont écrites à la main : la sortie ne doit pas dépendre
/// de `NO_COLOR` ni d'aucun état du terminal.
///
/// # Example
/// ```
/// use cg_ascii::line::render_row;
/// let line = render_row(&[255, 255, 255]);
/// assert_eq!(line.as_str(), "\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m$$\x1b[0m\n");
/// ```
#[must_use]
pub fn render_row(row: &[u8]) -> RenderedLine {
    let mut line = String::with_capacity(row.len() / CHANNELS * BYTES_PER_PIXEL + RESET.len() + 1);
    for px in row.chunks_exact(CHANNELS) {
        let (r, g, b) = (px[0], px[1], px[2]);
        let glyph = select_glyph(gray_level(r, g, b));
        line.push_str(BACKGROUND);
        // fmt::Write sur String est infaillible.
        let _ = write!(line, "\x1b[38;2;{r};{g};{b}m");
        line.push(glyph);
        line.push(glyph);
    }
    line.push_str(RESET);
    line.push('\n');
    RenderedLine::new(line)
}

/// Render every row of `grid`, top to bottom.
#[must_use]
pub fn render_grid(grid: &PixelGrid) -> Vec<RenderedLine> {
    grid.rows().map(render_row).collect()
}
