//! Mechanical endstop switch
//!
//! A microswitch on a GPIO input marking one edge of the sweep. Wired
//! active-high by default; active-low wiring (switch to ground with a
//! pull-up) is selected with the pin's `inverted` flag.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use windvane_core::config::SwitchConfig;
use windvane_core::traits::LimitSwitch;

/// Endstop on a GPIO input
pub struct EndstopSwitch<P> {
    pin: P,
    /// If true, triggered = pin LOW
    active_low: bool,
}

impl<P: InputPin<Error = Infallible>> EndstopSwitch<P> {
    /// Create a new endstop
    ///
    /// # Arguments
    /// - `pin`: The GPIO input the switch is wired to
    /// - `active_low`: If true, the switch reads triggered when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create an endstop that reads triggered when the pin is HIGH
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an endstop that reads triggered when the pin is LOW
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Create an endstop with the configured polarity
    pub fn from_config(pin: P, config: &SwitchConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Release the input pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin<Error = Infallible>> LimitSwitch for EndstopSwitch<P> {
    fn is_triggered(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(e) => match e {},
        }
    }
}
