//! # Error Types
//!
//! All failures of the decoding pipeline surface as [`EngineError`].
//!
//! Unmatched glyphs are not errors: the tokenizer skips them. An unknown
//! folio is not an error either; it yields no frequencies, which is then
//! reported as [`EngineError::EmptyFrequencySet`] by the first stage that
//! needs at least one tone.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage that rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Synthesis,
    FieldRendering,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Synthesis => write!(f, "tone synthesis"),
            Stage::FieldRendering => write!(f, "field rendering"),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    /// No frequencies reached a stage that averages or normalizes over them.
    ///
    /// # Example
    /// ```
    /// # use eidophone::{EngineError, Stage};
    /// let err = EngineError::EmptyFrequencySet { stage: Stage::Synthesis };
    /// assert_eq!(err.to_string(), "Empty frequency set: tone synthesis needs at least one frequency");
    /// ```
    #[error("Empty frequency set: {stage} needs at least one frequency")]
    EmptyFrequencySet { stage: Stage },

    /// A synthesis, field or output parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The glyph table resource is malformed.
    #[error("Invalid glyph table: {0}")]
    InvalidGlyphTable(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
