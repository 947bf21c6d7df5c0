/// ASCII conversion engine for chromaglyph.
///
/// Maps pixels to glyphs, encodes rows as truecolor terminal lines and
/// assembles still images and animations into rendered sequences.
pub mod assemble;
pub mod line;
pub mod luminance;

pub use assemble::{assemble_animation, assemble_image};
pub use line::render_row;
pub use luminance::{luminance, select_glyph};
