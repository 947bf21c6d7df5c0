/// Terminal output for chromaglyph.
///
/// Timed playback of animations and one-shot printing of still images.
pub mod guard;
pub mod playback;
pub mod print;

pub use playback::{ThreadClock, play, play_with};
pub use print::{print_image, print_image_stdout};
