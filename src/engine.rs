//! Folio rendering session: resources, pipeline, artifact writers and viewer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::audio::{encode_wav, spectral_peaks, SpectralPeak};
use crate::cymatics::encode_png;
use crate::error::{EngineError, Result};
use crate::folio::{FolioLibrary, FolioSource};
use crate::glyphs::GlyphTable;
use crate::params::EngineConfig;
use crate::pipeline::{render_for_input_set, Rendering};
use crate::viewer::Viewer;

/// What to do with a finished rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the WAV and PNG artifacts
    pub save: bool,

    /// Hand the field to the viewer
    pub show: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            save: true,
            show: true,
        }
    }
}

/// Result of rendering one folio
#[derive(Debug, Clone)]
pub struct FolioRun {
    pub folio: String,
    pub rendering: Rendering,

    /// Dominant peaks of the tone stack
    pub spectrum: Vec<SpectralPeak>,

    /// Written WAV file, if saved
    pub audio_path: Option<PathBuf>,

    /// Written PNG file, if saved
    pub image_path: Option<PathBuf>,
}

/// Rendering session over one glyph table and one folio source
pub struct Engine {
    table: GlyphTable,
    folios: Box<dyn FolioSource>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(table: GlyphTable, folios: Box<dyn FolioSource>, config: EngineConfig) -> Self {
        Self {
            table,
            folios,
            config,
        }
    }

    /// Build a session from configuration, falling back to bundled resources
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let table = match &config.glyph_table {
            Some(path) => GlyphTable::load(path)?,
            None => GlyphTable::builtin()?,
        };
        let folios = match &config.folios {
            Some(path) => FolioLibrary::load(path)?,
            None => FolioLibrary::builtin()?,
        };
        info!("Glyph table: {} glyphs", table.len());

        Ok(Self::new(table, Box::new(folios), config))
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Render a folio, then persist and/or display the result.
    ///
    /// Artifacts are only written or shown once both the waveform and the
    /// field were produced, and the WAV and PNG are persisted together or
    /// not at all.
    pub fn render_folio(
        &self,
        folio: &str,
        options: RunOptions,
        viewer: &mut dyn Viewer,
    ) -> Result<FolioRun> {
        info!("Rendering folio {}", folio);

        let entries = self.folios.lookup(folio);
        if entries.is_empty() {
            warn!("Folio '{}' is unknown or has no transcription", folio);
        }

        let rendering =
            render_for_input_set(entries, &self.table, &self.config.synth, &self.config.field)?;

        let spectrum = spectral_peaks(&rendering.waveform, &self.config.analysis);
        for peak in &spectrum {
            debug!(
                frequency_hz = peak.frequency_hz,
                magnitude = peak.magnitude,
                "spectral peak"
            );
        }

        let (audio_path, image_path) = if options.save {
            let audio_path = self.config.output.audio_path(folio);
            let image_path = self.config.output.image_path(folio);
            let wav = encode_wav(&rendering.waveform)?;
            let png = encode_png(&rendering.field)?;
            commit_artifacts(&[
                (audio_path.as_path(), wav.as_slice()),
                (image_path.as_path(), png.as_slice()),
            ])?;
            (Some(audio_path), Some(image_path))
        } else {
            (None, None)
        };

        if options.show {
            viewer.show(&rendering.field, &caption(folio))?;
        }

        Ok(FolioRun {
            folio: folio.to_string(),
            rendering,
            spectrum,
            audio_path,
            image_path,
        })
    }
}

/// Write encoded artifacts all-or-nothing.
///
/// Parent directories are created before any file is written; if a write
/// fails, the files this call already wrote are removed again.
fn commit_artifacts(artifacts: &[(&Path, &[u8])]) -> Result<()> {
    for (path, _) in artifacts {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))?;
        }
    }

    for (i, (path, bytes)) in artifacts.iter().enumerate() {
        if let Err(source) = fs::write(path, bytes) {
            for (written, _) in &artifacts[..i] {
                if let Err(e) = fs::remove_file(written) {
                    warn!("Could not remove {}: {}", written.display(), e);
                }
            }
            return Err(EngineError::io(*path, source));
        }
    }

    for (path, _) in artifacts {
        info!("Saved: {}", path.display());
    }
    Ok(())
}

/// Viewer caption for a folio
pub fn caption(folio: &str) -> String {
    format!("Eidophonic Cymatic – {}", folio)
}
