//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in windvane-core for the flagpole scanner hardware:
//!
//! - Stepper drivers (ULN2003 with a 28BYJ-48)
//! - Limit switches (mechanical endstop on a GPIO input)
//! - Flow sensors (FS5 thermal mass flow sensor)

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
pub mod stepper;
pub mod switch;
