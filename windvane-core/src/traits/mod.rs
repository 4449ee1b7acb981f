//! Hardware abstraction traits
//!
//! These traits define the interface between the scan logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod sensor;
pub mod switch;

pub use actuator::{Actuator, Direction};
pub use sensor::{FlowSensor, SensorError};
pub use switch::LimitSwitch;
