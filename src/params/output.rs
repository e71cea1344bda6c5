//! Artifact output and preview configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the folio identifier in file name templates
pub const FOLIO_PLACEHOLDER: &str = "{folio}";

/// Where and how rendered artifacts are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for WAV files
    pub audio_dir: PathBuf,

    /// Directory for PNG files
    pub image_dir: PathBuf,

    /// WAV file name template
    pub audio_name: String,

    /// PNG file name template
    pub image_name: String,

    /// Terminal preview width (characters)
    pub preview_columns: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            audio_dir: PathBuf::from("audio"),
            image_dir: PathBuf::from("cymatics"),
            audio_name: "{folio}_interstellar.wav".to_string(),
            image_name: "{folio}_cymatic.png".to_string(),
            preview_columns: 64,
        }
    }
}

impl OutputConfig {
    /// Audio file path for a folio
    pub fn audio_path(&self, folio: &str) -> PathBuf {
        self.audio_dir
            .join(self.audio_name.replace(FOLIO_PLACEHOLDER, folio))
    }

    /// Image file path for a folio
    pub fn image_path(&self, folio: &str) -> PathBuf {
        self.image_dir
            .join(self.image_name.replace(FOLIO_PLACEHOLDER, folio))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.audio_name.is_empty() || self.image_name.is_empty() {
            return Err("Artifact name templates must not be empty".to_string());
        }
        if self.preview_columns == 0 {
            return Err("Preview width must be > 0".to_string());
        }
        Ok(())
    }
}
