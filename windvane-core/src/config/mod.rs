//! Configuration types
//!
//! Board-agnostic configuration structures. Optionally deserialized from
//! TOML with the `toml` feature.

pub mod calibration;
pub mod hardware;
#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

pub use calibration::*;
pub use hardware::*;
#[cfg(feature = "toml")]
pub use loader::from_toml;
pub use types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rotation speed must be non-zero
    ZeroRpm,
    /// Release margin must be non-zero or the switch never clears
    ZeroReleaseMargin,
    /// A configured step budget of zero forbids any movement
    ZeroStepBudget,
    /// Sensor calibration or ADC settings invalid
    Calibration(CalibrationError),
    /// Configuration text could not be parsed
    Parse,
}

impl From<CalibrationError> for ConfigError {
    fn from(e: CalibrationError) -> Self {
        ConfigError::Calibration(e)
    }
}

/// Complete unit configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindvaneConfig {
    /// Limit switch wiring
    #[cfg_attr(feature = "serde", serde(default))]
    pub hardware: HardwareConfig,
    /// Scan parameters
    #[cfg_attr(feature = "serde", serde(default))]
    pub scan: ScanConfig,
    /// Sensor calibration (no default; measured per sensor)
    pub sensor: SensorCalibration,
    /// Analog front end
    #[cfg_attr(feature = "serde", serde(default))]
    pub adc: AdcConfig,
}

impl WindvaneConfig {
    /// Create a configuration with default wiring and scan parameters
    pub fn new(sensor: SensorCalibration) -> Self {
        Self {
            hardware: HardwareConfig::default(),
            scan: ScanConfig::default(),
            sensor,
            adc: AdcConfig::default(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()?;
        self.sensor.validate()?;
        self.adc.validate()?;
        Ok(())
    }
}
