//! TOML configuration loading
//!
//! ```toml
//! [hardware]
//! limit_switch = { inverted = true }
//!
//! [scan]
//! homing_direction = "clockwise"
//! release_margin = 400
//! calibration_margin = 300
//!
//! [sensor]
//! u0 = 1.0
//! u50 = 2.0
//! v50 = 5.0
//! n = 2.5
//! ```
//!
//! Omitted sections and keys fall back to their defaults, except `[sensor]`
//! which must be measured for each unit.

use super::{ConfigError, WindvaneConfig};

/// Parse and validate a configuration document
pub fn from_toml(input: &str) -> Result<WindvaneConfig, ConfigError> {
    let config: WindvaneConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HardwareConfig;
    use crate::traits::Direction;

    const FULL: &str = r#"
[hardware]
limit_switch = { inverted = true }

[scan]
homing_direction = "counter_clockwise"
rpm = 12
release_margin = 250
calibration_margin = -40
sweep_step_budget = 5000

[sensor]
u0 = 1.1
u50 = 2.3
v50 = 4.0
n = 2.0

[adc]
full_scale = 4095
reference_voltage = 3.3
"#;

    #[test]
    fn test_full_document() {
        let config = from_toml(FULL).unwrap();
        assert!(config.hardware.limit_switch.inverted);
        assert_eq!(config.scan.homing_direction, Direction::CounterClockwise);
        assert_eq!(config.scan.rpm, 12);
        assert_eq!(config.scan.release_margin, 250);
        assert_eq!(config.scan.calibration_margin, -40);
        assert_eq!(config.scan.sweep_step_budget, Some(5000));
        assert_eq!(config.adc.full_scale, 4095);
        // Unspecified keys keep defaults
        assert_eq!(config.adc.filter_cutoff_hz, 0.3);
    }

    #[test]
    fn test_sensor_only_uses_defaults() {
        let config = from_toml("[sensor]\nu0 = 1.0\nu50 = 2.0\nv50 = 5.0\nn = 2.5\n").unwrap();
        assert_eq!(config.scan.release_margin, 400);
        assert_eq!(config.scan.calibration_margin, 300);
        assert!(!config.hardware.limit_switch.inverted);
    }

    #[test]
    fn test_unknown_hardware_key_ignored() {
        // Pins are assigned by board bring-up, not here
        let doc = "[hardware]\ncoils = [8, 9, 10, 11]\nlimit_switch = { pin = 2 }\n[sensor]\nu0 = 1.0\nu50 = 2.0\nv50 = 5.0\nn = 2.5\n";
        let config = from_toml(doc).unwrap();
        assert_eq!(config.hardware, HardwareConfig::default());
    }

    #[test]
    fn test_missing_sensor_rejected() {
        assert_eq!(from_toml("[scan]\nrpm = 10\n"), Err(ConfigError::Parse));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let doc = "[scan]\nrelease_margin = 0\n[sensor]\nu0 = 1.0\nu50 = 2.0\nv50 = 5.0\nn = 2.5\n";
        assert_eq!(from_toml(doc), Err(ConfigError::ZeroReleaseMargin));
    }
}
