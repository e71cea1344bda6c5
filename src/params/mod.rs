//! Parameter definitions with physical units and documented semantics.
//!
//! Every tunable number of the pipeline lives here with:
//! - Physical units (seconds, Hz, pixels)
//! - Documented defaults
//! - A `validate()` check
//!
//! [`EngineConfig`] aggregates them and can be loaded from a YAML file in
//! which every field is optional.

mod audio;
mod field;
mod output;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

// Re-export all types
pub use audio::{AnalysisConfig, SynthConfig, MAX_SAMPLE_COUNT};
pub use field::{FieldConfig, MAX_FIELD_SIZE};
pub use output::{OutputConfig, FOLIO_PLACEHOLDER};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub synth: SynthConfig,
    pub field: FieldConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,

    /// External glyph table (YAML); the bundled table is used when unset
    pub glyph_table: Option<PathBuf>,

    /// External folio transcriptions (YAML); the bundled set is used when unset
    pub folios: Option<PathBuf>,
}

impl EngineConfig {
    /// Parse a YAML document, filling missing fields with defaults
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    ///
    /// Relative resource paths inside the file are resolved against the
    /// file's own directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let mut config = Self::from_yaml_str(&source)?;

        if let Some(base) = path.parent() {
            config.glyph_table = config.glyph_table.map(|p| resolve(base, p));
            config.folios = config.folios.map(|p| resolve(base, p));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.synth
            .validate()
            .and_then(|_| self.field.validate())
            .and_then(|_| self.analysis.validate())
            .and_then(|_| self.output.validate())
            .map_err(EngineError::InvalidParameter)
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}
