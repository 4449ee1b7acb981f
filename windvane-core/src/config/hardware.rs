//! Hardware configuration types
//!
//! Only the limit switch needs a per-unit setting: whether it reads
//! active-low. Pins, coil outputs and the sensor channel are handed to the
//! drivers as already-configured HAL objects.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of actuator coil outputs
pub const COIL_COUNT: usize = 4;

/// Limit switch polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwitchConfig {
    /// Switch reads triggered when the input is LOW
    pub inverted: bool,
}

impl SwitchConfig {
    /// Switch closes to the supply rail
    pub const fn active_high() -> Self {
        Self { inverted: false }
    }

    /// Switch closes to ground against a pull-up
    pub const fn active_low() -> Self {
        Self { inverted: true }
    }
}

/// Per-unit wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HardwareConfig {
    /// Limit switch input, active-high unless inverted
    pub limit_switch: SwitchConfig,
}
