//! Glyph table: the static symbol → frequency resource.
//!
//! A table is built once (from the bundled YAML asset or an external file),
//! validated, and then only ever borrowed. Symbols are unique; several
//! symbols may share a frequency.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Longest glyph symbol, in characters
pub const MAX_GLYPH_LEN: usize = 2;

const BUILTIN_TABLE: &str = include_str!("../assets/glyphs.yaml");

/// One glyph and its tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphEntry {
    pub symbol: String,
    pub frequency_hz: f64,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub color: String,
}

/// Immutable lookup table from glyph symbol to entry
#[derive(Debug, Clone)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
    index: HashMap<String, usize>,
}

impl GlyphTable {
    /// Build a table, rejecting malformed or duplicate symbols
    pub fn from_entries(entries: Vec<GlyphEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let len = entry.symbol.chars().count();
            if len == 0 || len > MAX_GLYPH_LEN {
                return Err(EngineError::InvalidGlyphTable(format!(
                    "symbol '{}' must be 1 to {} characters",
                    entry.symbol, MAX_GLYPH_LEN
                )));
            }
            if !(entry.frequency_hz.is_finite() && entry.frequency_hz > 0.0) {
                return Err(EngineError::InvalidGlyphTable(format!(
                    "symbol '{}' has non-positive frequency {}",
                    entry.symbol, entry.frequency_hz
                )));
            }
            if index.insert(entry.symbol.clone(), i).is_some() {
                return Err(EngineError::InvalidGlyphTable(format!(
                    "duplicate symbol '{}'",
                    entry.symbol
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Build a table from bare `(symbol, frequency)` pairs
    pub fn from_frequencies<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self> {
        let entries = pairs
            .into_iter()
            .map(|(symbol, frequency_hz)| GlyphEntry {
                symbol: symbol.to_string(),
                frequency_hz,
                meaning: String::new(),
                color: String::new(),
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Parse a YAML sequence of glyph entries
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let entries: Vec<GlyphEntry> = serde_yaml::from_str(source)?;
        Self::from_entries(entries)
    }

    /// Load a glyph table from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_yaml_str(&source)
    }

    /// The master table bundled with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_TABLE)
    }

    pub fn get(&self, symbol: &str) -> Option<&GlyphEntry> {
        self.index.get(symbol).map(|&i| &self.entries[i])
    }

    pub fn frequency(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|entry| entry.frequency_hz)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &GlyphEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let table = GlyphTable::builtin().unwrap();
        assert_eq!(table.len(), 13);
        assert_eq!(table.frequency("o"), Some(200.0));
        assert_eq!(table.frequency("sh"), Some(523.25));
        assert_eq!(table.frequency("in"), Some(1174.66));

        let al = table.get("al").unwrap();
        assert_eq!(al.meaning, "root / anchor");
        assert_eq!(al.color, "red");
    }

    #[test]
    fn test_unknown_symbol() {
        let table = GlyphTable::builtin().unwrap();
        assert_eq!(table.get("x"), None);
        assert_eq!(table.frequency("shh"), None);
    }

    #[test]
    fn test_shared_frequencies_allowed() {
        let table = GlyphTable::from_frequencies([("a", 440.0), ("A", 440.0)]).unwrap();
        assert_eq!(table.frequency("a"), table.frequency("A"));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let err = GlyphTable::from_frequencies([("a", 440.0), ("a", 220.0)]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidGlyphTable(_)));
    }

    #[test]
    fn test_symbol_length_checked_in_chars() {
        assert!(GlyphTable::from_frequencies([("", 1.0)]).is_err());
        assert!(GlyphTable::from_frequencies([("abc", 1.0)]).is_err());
        // Two multi-byte characters are still a two-character glyph
        assert!(GlyphTable::from_frequencies([("éè", 1.0)]).is_ok());
    }

    #[test]
    fn test_non_positive_frequency_rejected() {
        assert!(GlyphTable::from_frequencies([("a", 0.0)]).is_err());
        assert!(GlyphTable::from_frequencies([("a", -440.0)]).is_err());
        assert!(GlyphTable::from_frequencies([("a", f64::NAN)]).is_err());
    }

    #[test]
    fn test_yaml_metadata_optional() {
        let table = GlyphTable::from_yaml_str(
            r#"
- symbol: "o"
  frequency_hz: 200.0
- symbol: "a"
  frequency_hz: 440.0
  meaning: life / growth
"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("o").unwrap().meaning, "");
        assert_eq!(table.get("a").unwrap().meaning, "life / growth");
    }
}
