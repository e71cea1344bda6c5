//! Input-set orchestration: tokenize every entry, then synthesize and render
//! the combined frequency sequence.

use tracing::{debug, info, trace};

use crate::audio::{synthesize, Waveform};
use crate::cymatics::{render_field, Field};
use crate::error::Result;
use crate::frequencies::distinct;
use crate::glyphs::GlyphTable;
use crate::params::{FieldConfig, SynthConfig};
use crate::tokenizer::{ScanStep, Scanner};

/// Outputs of one pipeline run
#[derive(Debug, Clone)]
pub struct Rendering {
    /// Frequencies of all matched glyphs, entries concatenated in input order
    pub frequencies: Vec<f64>,
    pub waveform: Waveform,
    pub field: Field,
}

impl Rendering {
    pub fn glyph_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Distinct frequencies, ascending
    pub fn distinct_frequencies(&self) -> Vec<f64> {
        distinct(&self.frequencies)
    }
}

/// Tokenize each raw entry, concatenate the frequencies, and render both the
/// tone stack and the cymatic field from the combined sequence.
///
/// Fails with `EmptyFrequencySet` when no glyph matched anywhere in the set.
pub fn render_for_input_set<S: AsRef<str>>(
    entries: &[S],
    table: &GlyphTable,
    synth: &SynthConfig,
    field: &FieldConfig,
) -> Result<Rendering> {
    let mut frequencies = Vec::new();

    for raw in entries {
        let raw = raw.as_ref();
        for step in Scanner::new(raw, table) {
            match step {
                ScanStep::Matched {
                    symbol,
                    frequency_hz,
                } => {
                    if let Some(glyph) = table.get(symbol) {
                        debug!(
                            entry = raw,
                            symbol,
                            frequency_hz,
                            meaning = %glyph.meaning,
                            color = %glyph.color,
                            "glyph"
                        );
                    }
                    frequencies.push(frequency_hz);
                }
                ScanStep::Skipped(c) => trace!(entry = raw, skipped = %c, "no glyph"),
            }
        }
    }

    let unique = distinct(&frequencies);
    info!(
        "{} glyphs -> {} unique frequencies",
        frequencies.len(),
        unique.len()
    );
    info!("Frequencies (Hz): {:?}", unique);

    let waveform = synthesize(&frequencies, synth)?;
    let field = render_field(&frequencies, field)?;

    Ok(Rendering {
        frequencies,
        waveform,
        field,
    })
}
