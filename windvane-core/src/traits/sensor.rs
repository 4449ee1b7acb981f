//! Flow sensor trait

/// Errors that can occur with flow sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed
    ConversionError,
}

/// Trait for flow sensors
///
/// Implementations own their filter history, so consecutive reads are
/// smoothed against each other.
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait FlowSensor {
    /// Read the low-pass filtered sensor voltage in volts
    ///
    /// This is the value the scan uses for peak tracking. It is not clamped
    /// to the zero-flow floor.
    fn read_voltage(&mut self) -> Result<f32, SensorError>;

    /// Read the estimated flow velocity in m/s
    ///
    /// Takes a fresh filtered reading and converts it through the sensor's
    /// calibration model.
    fn read_velocity(&mut self) -> Result<f32, SensorError>;
}
