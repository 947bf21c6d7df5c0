/// Shared types for chromaglyph.
///
/// Pixel grids, the glyph ramp, rendered frames, errors and the runtime
/// options used across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::{GLYPH_RAMP, LuminanceLut, RAMP_LUT};
pub use config::{ConvertConfig, PlaybackConfig};
pub use error::{CoreError, Result};
pub use frame::{PixelGrid, RenderedFrame, RenderedLine, Sequence, rgb_len};
pub use traits::FrameClock;
