//! Greedy longest-match tokenizer.
//!
//! Scans a raw glyph string left to right with a single cursor. At each
//! position the longest table symbol starting there wins (two characters,
//! then one); a character that starts no symbol is skipped. A match is never
//! revisited, so every input has exactly one tokenization.

use crate::glyphs::{GlyphTable, MAX_GLYPH_LEN};

/// Outcome of one scan step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanStep<'a> {
    /// A glyph was recognized; `symbol` borrows from the input
    Matched { symbol: &'a str, frequency_hz: f64 },

    /// The character at the cursor starts no glyph and was dropped
    Skipped(char),
}

impl ScanStep<'_> {
    pub fn frequency(&self) -> Option<f64> {
        match self {
            ScanStep::Matched { frequency_hz, .. } => Some(*frequency_hz),
            ScanStep::Skipped(_) => None,
        }
    }
}

/// Iterator over the scan steps of one raw sequence
pub struct Scanner<'a, 't> {
    input: &'a str,
    cursor: usize,
    table: &'t GlyphTable,
}

impl<'a, 't> Scanner<'a, 't> {
    pub fn new(input: &'a str, table: &'t GlyphTable) -> Self {
        Self {
            input,
            cursor: 0,
            table,
        }
    }
}

impl<'a> Iterator for Scanner<'a, '_> {
    type Item = ScanStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let rest = &input[self.cursor..];
        let first = rest.chars().next()?;

        // Byte offsets where candidates of 1..=MAX_GLYPH_LEN characters end
        let mut ends = [0usize; MAX_GLYPH_LEN];
        let mut available = 0;
        for (offset, c) in rest.char_indices().take(MAX_GLYPH_LEN) {
            ends[available] = offset + c.len_utf8();
            available += 1;
        }

        for &end in ends[..available].iter().rev() {
            let symbol = &rest[..end];
            if let Some(frequency_hz) = self.table.frequency(symbol) {
                self.cursor += end;
                return Some(ScanStep::Matched {
                    symbol,
                    frequency_hz,
                });
            }
        }

        self.cursor += first.len_utf8();
        Some(ScanStep::Skipped(first))
    }
}

/// Convert a raw glyph string to its frequency sequence (Hz), in match order
pub fn tokenize(raw: &str, table: &GlyphTable) -> Vec<f64> {
    Scanner::new(raw, table)
        .filter_map(|step| step.frequency())
        .collect()
}
