//! Tone stack synthesis, spectral analysis and WAV output.
//!
//! Each glyph frequency becomes one sine component; components are summed
//! and averaged into a single mono waveform.

mod analysis;
mod synthesis;
mod wav;

// Re-export public types
pub use analysis::{hann_window, spectral_peaks, SpectralPeak};
pub use synthesis::{synthesize, Waveform};
pub use wav::{encode_wav, to_pcm16, write_wav};
