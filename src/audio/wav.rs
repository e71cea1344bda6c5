//! 16-bit PCM WAV output.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use tracing::{info, warn};

use super::synthesis::Waveform;
use crate::error::{EngineError, Result};

/// Full-scale value of a 16-bit sample
const PCM_FULL_SCALE: f64 = 32767.0;

/// Quantize to signed 16-bit PCM.
///
/// Samples are clamped to [-1, 1] first; returns the samples and how many
/// of them had to be clamped.
pub fn to_pcm16(waveform: &Waveform) -> (Vec<i16>, usize) {
    let mut clipped = 0;
    let pcm = waveform
        .samples()
        .iter()
        .map(|&s| {
            if !(-1.0..=1.0).contains(&s) {
                clipped += 1;
            }
            (s.clamp(-1.0, 1.0) * PCM_FULL_SCALE) as i16
        })
        .collect();
    (pcm, clipped)
}

/// Encode the waveform as an in-memory mono 16-bit WAV file
pub fn encode_wav(waveform: &Waveform) -> Result<Vec<u8>> {
    let (pcm, clipped) = to_pcm16(waveform);
    if clipped > 0 {
        warn!(clipped, total = pcm.len(), "Tone stack exceeds full scale, clamping");
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate_hz(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec)?;
    for sample in pcm {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(bytes)
}

/// Write the waveform as a mono 16-bit WAV file, creating parent directories
pub fn write_wav(waveform: &Waveform, path: &Path) -> Result<()> {
    let bytes = encode_wav(waveform)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))?;
    }
    fs::write(path, bytes).map_err(|e| EngineError::io(path, e))?;

    info!("Audio saved: {}", path.display());
    Ok(())
}
