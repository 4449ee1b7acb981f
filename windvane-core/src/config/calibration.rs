//! Flow sensor calibration types
//!
//! Two-point calibration for a constant-temperature thermal flow sensor,
//! plus the analog front end that feeds it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ADC counts at full scale (10-bit)
pub const DEFAULT_ADC_FULL_SCALE: u16 = 1023;

/// ADC reference voltage at full scale
pub const DEFAULT_REFERENCE_VOLTAGE: f32 = 5.0;

/// Low-pass filter cutoff
pub const DEFAULT_FILTER_CUTOFF_HZ: f32 = 0.3;

/// Calibration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Zero-flow voltage must be positive
    InvalidZeroFlowVoltage,
    /// Reference voltage must exceed the zero-flow voltage
    ReferenceBelowZeroFlow,
    /// Reference velocity must be positive
    InvalidReferenceVelocity,
    /// Shape exponent must be positive
    InvalidExponent,
    /// ADC full scale must be non-zero
    InvalidFullScale,
    /// Filter cutoff must be positive
    InvalidFilter,
}

/// Two-point sensor calibration
///
/// All values must be finite. Voltages are in volts, velocity in m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorCalibration {
    /// Voltage at 0% flow
    pub u0: f32,
    /// Voltage at 50% flow
    pub u50: f32,
    /// Flow velocity at 50% flow
    pub v50: f32,
    /// Power-law shape exponent
    pub n: f32,
}

impl SensorCalibration {
    /// Create a calibration from the two reference points
    pub const fn new(u0: f32, u50: f32, v50: f32, n: f32) -> Self {
        Self { u0, u50, v50, n }
    }

    /// Validate the calibration
    pub fn validate(&self) -> Result<(), CalibrationError> {
        // Written as negated comparisons so NaN fails too
        if !(self.u0 > 0.0) {
            return Err(CalibrationError::InvalidZeroFlowVoltage);
        }
        if !(self.u50 > self.u0) {
            return Err(CalibrationError::ReferenceBelowZeroFlow);
        }
        if !(self.v50 > 0.0) {
            return Err(CalibrationError::InvalidReferenceVelocity);
        }
        if !(self.n > 0.0) {
            return Err(CalibrationError::InvalidExponent);
        }
        Ok(())
    }
}

/// Analog front end configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdcConfig {
    /// ADC counts at the reference voltage
    pub full_scale: u16,
    /// Voltage at full scale
    pub reference_voltage: f32,
    /// Low-pass cutoff frequency in Hz
    pub filter_cutoff_hz: f32,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            full_scale: DEFAULT_ADC_FULL_SCALE,
            reference_voltage: DEFAULT_REFERENCE_VOLTAGE,
            filter_cutoff_hz: DEFAULT_FILTER_CUTOFF_HZ,
        }
    }
}

impl AdcConfig {
    /// Volts per ADC count
    pub fn volts_per_count(&self) -> f32 {
        self.reference_voltage / self.full_scale as f32
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.full_scale == 0 {
            return Err(CalibrationError::InvalidFullScale);
        }
        if !(self.filter_cutoff_hz > 0.0) {
            return Err(CalibrationError::InvalidFilter);
        }
        Ok(())
    }
}
