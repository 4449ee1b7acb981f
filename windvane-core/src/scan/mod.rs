//! Scan and alignment
//!
//! Finds the bearing of strongest airflow by homing against the limit
//! switch, sweeping the full range while sampling the flow sensor, and
//! driving back to the peak.

pub mod controller;
pub mod error;
pub mod peak;
pub mod report;
pub mod target;

#[cfg(test)]
pub(crate) mod sim;

pub use controller::ScanController;
pub use error::ScanError;
pub use peak::{Peak, PeakTracker};
pub use report::{AlignOutcome, PhaseSummary, ScanReport, MAX_PHASES};
pub use target::alignment_target;
