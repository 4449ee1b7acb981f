//! One-pole low-pass filter
//!
//! Exponential smoothing at a fixed cutoff frequency:
//!
//! ```text
//! y[k] = x[k] + a * (y[k-1] - x[k]),   a = exp(-2π · fc · dt)
//! ```
//!
//! The output starts at zero, so the first readings ramp up toward the
//! input over a few time constants.

use core::f32::consts::PI;

/// One-pole low-pass filter with a fixed sample interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LowPassFilter {
    /// Decay factor per sample
    alpha: f32,
    /// Last output
    output: f32,
}

impl LowPassFilter {
    /// Create a filter for the given cutoff and sample interval
    pub fn new(cutoff_hz: f32, sample_interval_us: u32) -> Self {
        let dt = sample_interval_us as f32 * 1e-6;
        Self {
            alpha: libm::expf(-2.0 * PI * cutoff_hz * dt),
            output: 0.0,
        }
    }

    /// Feed one sample and return the new output
    pub fn input(&mut self, x: f32) -> f32 {
        self.output = x + self.alpha * (self.output - x);
        self.output
    }

    /// Last output without feeding a sample
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Clear the filter history
    pub fn reset(&mut self) {
        self.output = 0.0;
    }
}
