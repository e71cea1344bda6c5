//! Additive tone stack synthesis.

use std::f64::consts::PI;

use crate::error::{EngineError, Result, Stage};
use crate::frequencies::canonical_order;
use crate::params::SynthConfig;

/// Rendered mono waveform
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    sample_rate_hz: u32,
    duration_s: f64,
}

impl Waveform {
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }
}

/// Superpose one sine per frequency and average them.
///
/// Each tone contributes `tone_amplitude * sin(2π f t)` at
/// `t = i * duration / n` for `n = round(duration * sample_rate)`; the sum is
/// divided by the number of tones. The result is not peak-normalized and may
/// leave [-1, 1] unless `hard_clip` is set.
pub fn synthesize(freqs: &[f64], config: &SynthConfig) -> Result<Waveform> {
    if freqs.is_empty() {
        return Err(EngineError::EmptyFrequencySet {
            stage: Stage::Synthesis,
        });
    }
    config.validate().map_err(EngineError::InvalidParameter)?;

    let n = config.sample_count();
    if n == 0 {
        return Err(EngineError::InvalidParameter(format!(
            "{} s at {} Hz yields no samples",
            config.duration_s, config.sample_rate_hz
        )));
    }
    let dt = config.duration_s / n as f64;

    let mut samples = vec![0.0; n];
    for f in canonical_order(freqs) {
        let omega = 2.0 * PI * f;
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample += (omega * (i as f64 * dt)).sin() * config.tone_amplitude;
        }
    }

    let count = freqs.len() as f64;
    for sample in &mut samples {
        *sample /= count;
        if config.hard_clip {
            *sample = sample.clamp(-1.0, 1.0);
        }
    }

    Ok(Waveform {
        samples,
        sample_rate_hz: config.sample_rate_hz,
        duration_s: config.duration_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(duration_s: f64, sample_rate_hz: u32) -> SynthConfig {
        SynthConfig {
            duration_s,
            sample_rate_hz,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_frequency_set() {
        let err = synthesize(&[], &config(1.0, 8)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::EmptyFrequencySet {
                stage: Stage::Synthesis
            }
        ));
    }

    #[test]
    fn test_two_tone_samples() {
        let wave = synthesize(&[200.0, 440.0], &config(1.0, 8)).unwrap();
        assert_eq!(wave.len(), 8);
        assert_eq!(wave.sample_rate_hz(), 8);

        for (i, &sample) in wave.samples().iter().enumerate() {
            let t = i as f64 / 8.0;
            let expected =
                (0.3 * (2.0 * PI * 200.0 * t).sin() + 0.3 * (2.0 * PI * 440.0 * t).sin()) / 2.0;
            assert!((sample - expected).abs() < 1e-12, "sample {i}");
        }
    }

    #[test]
    fn test_single_tone_amplitude() {
        // 1 Hz sampled at 4 Hz hits the crest at t = 0.25
        let wave = synthesize(&[1.0], &config(1.0, 4)).unwrap();
        assert!(wave.samples()[0].abs() < 1e-12);
        assert!((wave.samples()[1] - 0.3).abs() < 1e-12);
        assert!((wave.peak() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_order_invariance() {
        let cfg = config(0.05, 44100);
        let a = synthesize(&[523.25, 200.0, 987.77, 261.63], &cfg).unwrap();
        let b = synthesize(&[261.63, 987.77, 200.0, 523.25], &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_tones_average_to_one() {
        let cfg = config(0.01, 8000);
        let single = synthesize(&[440.0], &cfg).unwrap();
        let triple = synthesize(&[440.0, 440.0, 440.0], &cfg).unwrap();
        for (a, b) in single.samples().iter().zip(triple.samples()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hard_clip() {
        let cfg = SynthConfig {
            duration_s: 1.0,
            sample_rate_hz: 4,
            tone_amplitude: 5.0,
            hard_clip: true,
        };
        let wave = synthesize(&[1.0], &cfg).unwrap();
        assert_eq!(wave.samples()[1], 1.0);
        assert_eq!(wave.samples()[3], -1.0);
    }

    #[test]
    fn test_too_short_for_a_sample() {
        let err = synthesize(&[440.0], &config(0.0001, 8)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_huge_duration_rejected_before_allocating() {
        let err = synthesize(&[440.0], &config(1e300, 44100)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }
}
