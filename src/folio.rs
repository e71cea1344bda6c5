//! Folio lookup: named input sets of raw glyph strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};

const BUILTIN_FOLIOS: &str = include_str!("../assets/folios.yaml");

/// Source of folio transcriptions
pub trait FolioSource {
    /// Raw glyph strings of a folio in transcription order; empty if unknown
    fn lookup(&self, folio: &str) -> &[String];
}

/// In-memory folio collection, keyed by identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolioLibrary {
    folios: BTreeMap<String, Vec<String>>,
}

impl FolioLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a folio
    pub fn with_folio<S: Into<String>>(
        mut self,
        folio: impl Into<String>,
        entries: impl IntoIterator<Item = S>,
    ) -> Self {
        self.folios
            .insert(folio.into(), entries.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a YAML mapping of folio identifier → list of raw strings
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let folios: BTreeMap<String, Vec<String>> = serde_yaml::from_str(source)?;
        Ok(Self { folios })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_yaml_str(&source)
    }

    /// Transcriptions bundled with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_FOLIOS)
    }

    /// Known folio identifiers, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.folios.keys().map(String::as_str)
    }
}

impl FolioSource for FolioLibrary {
    fn lookup(&self, folio: &str) -> &[String] {
        self.folios.get(folio).map(Vec::as_slice).unwrap_or(&[])
    }
}
