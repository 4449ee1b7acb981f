//! Board-agnostic core logic for the airflow bearing finder
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (actuator, limit switch, flow sensor)
//! - Phase state machine for a scan
//! - Scan controller (homing, sweep, alignment)
//! - Step budget safety limits
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "toml")]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod safety;
pub mod scan;
pub mod state;
pub mod traits;
