//! Spectral summary of a rendered tone stack.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

use super::synthesis::Waveform;
use crate::params::AnalysisConfig;

/// A local maximum of the magnitude spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub frequency_hz: f64,
    pub magnitude: f64,
}

/// Dominant spectral peaks of the waveform's opening window, by frequency.
///
/// The first `fft_size` samples (zero-padded if the waveform is shorter) are
/// Hann-windowed and transformed; the `peak_count` strongest local maxima
/// below Nyquist are returned in ascending frequency order.
pub fn spectral_peaks(waveform: &Waveform, config: &AnalysisConfig) -> Vec<SpectralPeak> {
    let size = config.fft_size;
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(size);

    // Apply Hann window
    let mut buffer: Vec<Complex<f64>> = (0..size)
        .map(|i| {
            let sample = waveform.samples().get(i).copied().unwrap_or(0.0);
            Complex::new(sample * hann_window(i, size), 0.0)
        })
        .collect();
    fft.process(&mut buffer);

    let magnitudes: Vec<f64> = buffer[..size / 2].iter().map(|c| c.norm()).collect();

    let mut peaks: Vec<SpectralPeak> = (1..magnitudes.len().saturating_sub(1))
        .filter(|&bin| {
            let m = magnitudes[bin];
            m > 0.0 && m > magnitudes[bin - 1] && m >= magnitudes[bin + 1]
        })
        .map(|bin| SpectralPeak {
            frequency_hz: config.bin_to_hz(bin, waveform.sample_rate_hz()),
            magnitude: magnitudes[bin],
        })
        .collect();

    peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    peaks.truncate(config.peak_count);
    peaks.sort_by(|a, b| a.frequency_hz.total_cmp(&b.frequency_hz));
    peaks
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f64 {
    0.5 * (1.0 - ((2.0 * PI * index as f64) / (size as f64 - 1.0)).cos())
}
