//! Tone synthesis and spectral analysis configuration.

use serde::{Deserialize, Serialize};

/// Largest waveform a 16-bit mono WAV data chunk can hold (2 bytes per sample)
pub const MAX_SAMPLE_COUNT: usize = (u32::MAX / 2) as usize;

/// Tone stack synthesis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Length of the rendered tone stack (seconds)
    pub duration_s: f64,

    /// Output sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Peak amplitude of each individual sine component (dimensionless)
    pub tone_amplitude: f64,

    /// Hard-clamp the averaged waveform to [-1, 1]
    /// Off by default: constructive interference may exceed unity
    pub hard_clip: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            duration_s: 8.0,
            sample_rate_hz: 44100,
            tone_amplitude: 0.3, // 30% per tone
            hard_clip: false,
        }
    }
}

impl SynthConfig {
    /// Number of samples in the rendered waveform
    pub fn sample_count(&self) -> usize {
        (self.duration_s * self.sample_rate_hz as f64).round() as usize
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) {
            return Err(format!("Duration must be > 0 s, got {}", self.duration_s));
        }
        if self.sample_rate_hz == 0 {
            return Err("Sample rate must be > 0".to_string());
        }
        let samples = (self.duration_s * self.sample_rate_hz as f64).round();
        if samples > MAX_SAMPLE_COUNT as f64 {
            return Err(format!(
                "{} s at {} Hz needs {} samples, max {}",
                self.duration_s, self.sample_rate_hz, samples, MAX_SAMPLE_COUNT
            ));
        }
        if !self.tone_amplitude.is_finite() {
            return Err(format!(
                "Tone amplitude must be finite, got {}",
                self.tone_amplitude
            ));
        }
        Ok(())
    }
}

/// Spectral summary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// FFT window size (must be power of 2)
    pub fft_size: usize,

    /// Number of dominant peaks to report
    pub peak_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fft_size: 8192, // ~5.4 Hz per bin @ 44.1kHz
            peak_count: 8,
        }
    }
}

impl AnalysisConfig {
    /// Convert FFT bin index to frequency (Hz)
    pub fn bin_to_hz(&self, bin: usize, sample_rate_hz: u32) -> f64 {
        bin as f64 * sample_rate_hz as f64 / self.fft_size as f64
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            ));
        }
        if self.fft_size < 4 {
            return Err(format!("FFT size must be >= 4, got {}", self.fft_size));
        }
        Ok(())
    }
}
