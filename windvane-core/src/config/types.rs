//! Scan configuration types
//!
//! Fixed for the lifetime of a controller. Defaults carry the values the
//! flagpole rig was tuned with.

use crate::safety::budget::DEFAULT_STEP_BUDGET;
use crate::traits::Direction;

use super::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Steps used to back off a triggered limit switch
pub const DEFAULT_RELEASE_MARGIN: u16 = 400;

/// Extra alignment steps compensating homing edge offset
pub const DEFAULT_CALIBRATION_MARGIN: i16 = 300;

/// Rotation speed during a scan
pub const DEFAULT_RPM: u16 = 16;

/// Half-steps per output revolution of a 28BYJ-48
///
/// The gearbox ratio is 63.684:1 rather than 64:1, so one output turn is
/// about 4076 half-steps, not the nominal 4096.
pub const STEPS_PER_REV: u32 = 4076;

/// Time one step takes at `rpm`, in microseconds
///
/// Zero RPM is treated as 1 RPM. Never returns zero.
pub fn step_interval_us(rpm: u16) -> u32 {
    let rpm = u32::from(rpm.max(1));
    (60_000_000 / (rpm * STEPS_PER_REV)).max(1)
}

/// Scan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Direction that drives the mechanism into the limit switch
    pub homing_direction: Direction,
    /// Rotation speed in RPM, applied once before scanning
    pub rpm: u16,
    /// Steps to back off the switch after every activation
    pub release_margin: u16,
    /// Extra steps added to the alignment target (may be negative)
    pub calibration_margin: i16,
    /// Step allowance for homing, None for unbounded
    pub homing_step_budget: Option<u32>,
    /// Step allowance for the sweep, None for unbounded
    pub sweep_step_budget: Option<u32>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            homing_direction: Direction::Clockwise,
            rpm: DEFAULT_RPM,
            release_margin: DEFAULT_RELEASE_MARGIN,
            calibration_margin: DEFAULT_CALIBRATION_MARGIN,
            homing_step_budget: Some(DEFAULT_STEP_BUDGET),
            sweep_step_budget: Some(DEFAULT_STEP_BUDGET),
        }
    }
}

impl ScanConfig {
    /// Configuration without step budgets
    ///
    /// Homing and sweeping wait for the switch indefinitely.
    pub fn unbounded() -> Self {
        Self {
            homing_step_budget: None,
            sweep_step_budget: None,
            ..Self::default()
        }
    }

    /// Direction the sweep travels in
    pub fn sweep_direction(&self) -> Direction {
        self.homing_direction.opposite()
    }

    /// Time between sweep readings, one per step, in microseconds
    pub fn step_interval_us(&self) -> u32 {
        step_interval_us(self.rpm)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpm == 0 {
            return Err(ConfigError::ZeroRpm);
        }

        if self.release_margin == 0 {
            return Err(ConfigError::ZeroReleaseMargin);
        }

        if self.homing_step_budget == Some(0) || self.sweep_step_budget == Some(0) {
            return Err(ConfigError::ZeroStepBudget);
        }

        Ok(())
    }
}
