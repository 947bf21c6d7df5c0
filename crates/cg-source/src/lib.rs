/// Decoding and resizing for chromaglyph.
///
/// Turns image files (still or animated) into `PixelGrid`s and scales them
/// while keeping the source aspect ratio.

pub mod animation;
pub mod image;
pub mod path;
pub mod resize;
