//! FS5 thermal mass flow sensor
//!
//! The FS5 runs in a constant temperature bridge; its output voltage rises
//! with flow following King's law. Velocity is recovered with a power-law
//! fit through two calibration points:
//!
//! ```text
//! k = ((U50 / U0)^2 - 1) / v50^n
//! v = ((U^2 - U0^2) / k)^(1/n) / U0^(2/n)
//! ```
//!
//! Voltages below `U0` are clamped to `U0` (zero flow) before conversion.
//!
//! The sensor is sampled once per sweep step, so the filter's sample
//! interval is the stepper's step interval at the configured speed.

use windvane_core::config::{AdcConfig, CalibrationError, SensorCalibration, WindvaneConfig};
use windvane_core::traits::{FlowSensor, SensorError};

use super::filter::LowPassFilter;
use super::AdcReader;

/// FS5 flow sensor on an ADC channel
pub struct Fs5Sensor<ADC> {
    adc: ADC,
    calibration: SensorCalibration,
    /// Fluid dependent constant, derived once from the calibration
    k: f32,
    volts_per_count: f32,
    filter: LowPassFilter,
}

impl<ADC> Fs5Sensor<ADC> {
    /// Create a new FS5 sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel wired to the sensor output
    /// - `calibration`: two-point calibration (`U0`, `U50`, `v50`, `n`)
    /// - `adc_config`: full scale, reference voltage and filter cutoff
    /// - `sample_interval_us`: time between reads
    pub fn new(
        adc: ADC,
        calibration: &SensorCalibration,
        adc_config: &AdcConfig,
        sample_interval_us: u32,
    ) -> Result<Self, CalibrationError> {
        calibration.validate()?;
        adc_config.validate()?;
        if sample_interval_us == 0 {
            return Err(CalibrationError::InvalidFilter);
        }

        Ok(Self {
            adc,
            calibration: *calibration,
            k: Self::fluid_constant(calibration),
            volts_per_count: adc_config.volts_per_count(),
            filter: LowPassFilter::new(adc_config.filter_cutoff_hz, sample_interval_us),
        })
    }

    /// Create a sensor sampled once per step at the configured scan speed
    pub fn from_config(adc: ADC, config: &WindvaneConfig) -> Result<Self, CalibrationError> {
        Self::new(adc, &config.sensor, &config.adc, config.scan.step_interval_us())
    }

    /// Compute `k` from the calibration points
    pub fn fluid_constant(cal: &SensorCalibration) -> f32 {
        let ratio = cal.u50 / cal.u0;
        (ratio * ratio - 1.0) / libm::powf(cal.v50, cal.n)
    }

    /// Fluid dependent constant in use
    pub fn k(&self) -> f32 {
        self.k
    }

    /// Calibration in use
    pub fn calibration(&self) -> &SensorCalibration {
        &self.calibration
    }

    /// Convert raw ADC counts to volts
    pub fn counts_to_volts(&self, raw: u16) -> f32 {
        raw as f32 * self.volts_per_count
    }

    /// Convert a filtered voltage to flow velocity
    pub fn velocity_from_voltage(&self, voltage: f32) -> f32 {
        let u0 = self.calibration.u0;
        let n = self.calibration.n;

        // Calibration noise can put readings under the zero-flow floor
        let u = if voltage < u0 { u0 } else { voltage };

        libm::powf((u - u0) * (u + u0) / self.k, 1.0 / n) / libm::powf(u0, 2.0 / n)
    }

    /// Clear the low-pass filter history
    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    /// Release the ADC channel
    pub fn into_inner(self) -> ADC {
        self.adc
    }
}

impl<ADC: AdcReader> FlowSensor for Fs5Sensor<ADC> {
    fn read_voltage(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        let volts = self.counts_to_volts(raw);
        Ok(self.filter.input(volts))
    }

    fn read_velocity(&mut self) -> Result<f32, SensorError> {
        let voltage = self.read_voltage()?;
        Ok(self.velocity_from_voltage(voltage))
    }
}
