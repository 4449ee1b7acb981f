//! Flow sensor implementations

pub mod filter;
pub mod fs5;

pub use filter::LowPassFilter;
pub use fs5::Fs5Sensor;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a raw ADC sample in counts
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub u16);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}
