//! Standing-wave interference field.

use std::f64::consts::PI;

use image::{GrayImage, Luma};

use crate::error::{EngineError, Result, Stage};
use crate::frequencies::canonical_order;
use crate::params::FieldConfig;

/// Square grid of 8-bit grayscale cells, row-major (row = Y, column = X)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    size: u32,
    cells: Vec<u8>,
}

impl Field {
    /// Cells per side
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells
            .get(y as usize * self.size as usize + x as usize)
            .copied()
    }

    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.size, self.size, |x, y| {
            Luma([self.cells[y as usize * self.size as usize + x as usize]])
        })
    }
}

/// `size` evenly spaced samples over [-extent, extent], both ends included
pub fn axis(size: u32, extent: f64) -> Vec<f64> {
    match size {
        0 => Vec::new(),
        1 => vec![-extent],
        _ => {
            let step = 2.0 * extent / (size - 1) as f64;
            let mut values: Vec<f64> = (0..size).map(|i| -extent + i as f64 * step).collect();
            values[size as usize - 1] = extent;
            values
        }
    }
}

/// Un-normalized interference sum `Σ sin(kπX)·sin(kπY)` with `k = f / divisor`
pub fn superpose(freqs: &[f64], config: &FieldConfig) -> Vec<f64> {
    let n = config.size as usize;
    let coords = axis(config.size, config.extent);
    let mut z = vec![0.0; n * n];

    for f in canonical_order(freqs) {
        let k = f / config.wavenumber_divisor_hz;
        // X and Y share the same axis, so one row of sines serves both
        let mode: Vec<f64> = coords.iter().map(|&v| (k * PI * v).sin()).collect();
        for (row, &sy) in mode.iter().enumerate() {
            for (col, &sx) in mode.iter().enumerate() {
                z[row * n + col] += sx * sy;
            }
        }
    }
    z
}

/// Spread below which a superposed field counts as constant.
///
/// Each tone adds one product of sines whose argument reaches `|k|π·extent`;
/// evaluating `sin` there carries an absolute error of a few ulps of that
/// argument, and the errors accumulate over the tones.
fn flatness_tolerance(freqs: &[f64], config: &FieldConfig) -> f64 {
    let f_max = freqs.iter().fold(0.0f64, |m, f| m.max(f.abs()));
    let arg_max = (f_max / config.wavenumber_divisor_hz * PI * config.extent).max(1.0);
    8.0 * f64::EPSILON * arg_max * freqs.len() as f64
}

/// Render the cymatic field: superpose, min-max normalize, quantize to u8.
///
/// A field that is constant before normalization, up to rounding noise,
/// renders as all zeros.
pub fn render_field(freqs: &[f64], config: &FieldConfig) -> Result<Field> {
    if freqs.is_empty() {
        return Err(EngineError::EmptyFrequencySet {
            stage: Stage::FieldRendering,
        });
    }
    config.validate().map_err(EngineError::InvalidParameter)?;

    let z = superpose(freqs, config);
    let (min, max) = z
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    let cells = if range > flatness_tolerance(freqs, config) {
        z.iter()
            .map(|&v| ((v - min) / range * 255.0) as u8)
            .collect()
    } else {
        vec![0; z.len()]
    };

    Ok(Field {
        size: config.size,
        cells,
    })
}
