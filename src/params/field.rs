//! Cymatic field rendering configuration.

use serde::{Deserialize, Serialize};

/// Largest grid side accepted (cells); the field is held as size² f64 values
pub const MAX_FIELD_SIZE: u32 = 8192;

/// Standing-wave field parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Grid resolution (cells per side, output image is size × size pixels)
    pub size: u32,

    /// Half-width of the sampled plate; axes span [-extent, extent]
    pub extent: f64,

    /// Tone frequency is divided by this to get the spatial wavenumber
    /// (Hz per unit of k)
    pub wavenumber_divisor_hz: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            extent: 2.0,
            wavenumber_divisor_hz: 100.0,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("Field size must be > 0".to_string());
        }
        if self.size > MAX_FIELD_SIZE {
            return Err(format!(
                "Field size must be <= {}, got {}",
                MAX_FIELD_SIZE, self.size
            ));
        }
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(format!("Field extent must be > 0, got {}", self.extent));
        }
        if !(self.wavenumber_divisor_hz.is_finite() && self.wavenumber_divisor_hz > 0.0) {
            return Err(format!(
                "Wavenumber divisor must be > 0 Hz, got {}",
                self.wavenumber_divisor_hz
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validate_size_bounds() {
        let mut config = FieldConfig::default();
        assert!(config.validate().is_ok());

        config.size = 0;
        assert!(config.validate().is_err());

        config.size = MAX_FIELD_SIZE;
        assert!(config.validate().is_ok());

        config.size = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_field_validate_rejects_bad_extent() {
        let mut config = FieldConfig::default();
        config.extent = f64::NAN;
        assert!(config.validate().is_err());

        config.extent = 2.0;
        config.wavenumber_divisor_hz = 0.0;
        assert!(config.validate().is_err());
    }
}
