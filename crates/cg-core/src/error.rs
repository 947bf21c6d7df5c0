use thiserror::Error;

/// Errors raised by the conversion pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    SourceNotFound {
        /// Path after environment expansion.
        path: String,
    },

    /// File exists but is not a decodable image or animation.
    #[error("Décodage impossible : {path}")]
    Decode {
        /// Path after environment expansion.
        path: String,
        /// Underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Target or source grid is degenerate (zero width or height).
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimension {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The resampler could not produce an output grid.
    #[error("Redimensionnement impossible : {0}")]
    Resize(String),

    /// Terminal write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used by every library crate of the workspace.
pub type Result<T> = std::result::Result<T, CoreError>;
