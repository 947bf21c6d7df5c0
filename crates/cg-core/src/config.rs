use std::time::Duration;

/// Facteur appliqué au délai natif de chaque frame pendant la lecture.
pub const DELAY_MULTIPLIER: u32 = 10;

/// Délai plancher entre deux frames (évite un scintillement imperceptible).
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(33);

/// Options de conversion. `0` = dimension non spécifiée.
///
/// # Example
/// ```
/// use cg_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert!(config.is_native());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Largeur cible en pixels (= paires de glyphes). 0 = déduite du ratio.
    pub width: u32,
    /// Hauteur cible en pixels (= lignes). 0 = déduite du ratio.
    pub height: u32,
}

impl ConvertConfig {
    /// `true` when neither dimension is specified (no resize at all).
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Options de lecture d'une animation.
///
/// # Example
/// ```
/// use cg_core::config::PlaybackConfig;
/// use std::time::Duration;
/// let config = PlaybackConfig::default();
/// assert_eq!(config.frame_wait(Duration::ZERO), Duration::from_millis(33));
/// assert_eq!(config.frame_wait(Duration::from_millis(10)), Duration::from_millis(100));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Nombre de boucles. `<= 0` : aucune frame écrite.
    pub loops: i64,
    /// Multiplicateur appliqué au délai de chaque frame.
    pub delay_multiplier: u32,
    /// Attente minimale entre deux frames.
    pub min_frame_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            loops: 1,
            delay_multiplier: DELAY_MULTIPLIER,
            min_frame_delay: MIN_FRAME_DELAY,
        }
    }
}

impl PlaybackConfig {
    /// Playback config with the default timing and `loops` iterations.
    #[must_use]
    pub fn with_loops(loops: i64) -> Self {
        Self {
            loops,
            ..Self::default()
        }
    }

    /// Wait after a frame: `max(multiplier × delay, min_frame_delay)`.
    #[inline]
    #[must_use]
    pub fn frame_wait(&self, delay: Duration) -> Duration {
        delay
            .saturating_mul(self.delay_multiplier)
            .max(self.min_frame_delay)
    }
}
