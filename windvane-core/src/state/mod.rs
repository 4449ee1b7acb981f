//! Scan phase state machine
//!
//! Defines the authoritative ordering of a scan.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{FaultKind, ScanPhase};
