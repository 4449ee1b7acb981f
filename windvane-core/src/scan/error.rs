//! Scan errors

use crate::state::{FaultKind, ScanPhase};
use crate::traits::SensorError;

/// Reasons a scan did not finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// Step budget spent before the limit switch activated
    LimitNotReached {
        /// Phase that was waiting for the switch
        phase: ScanPhase,
        /// Steps issued in that phase
        steps: u32,
    },
    /// Limit switch was already active when the sweep began
    EmptySweep,
    /// Computed alignment target was zero or negative
    InvalidTarget {
        /// The offending target
        target: i32,
    },
    /// Flow sensor read failed during the sweep
    Sensor(SensorError),
}

impl ScanError {
    /// Fault kind recorded in the phase machine
    pub fn kind(&self) -> FaultKind {
        match self {
            ScanError::LimitNotReached { .. } => FaultKind::LimitNotReached,
            ScanError::EmptySweep => FaultKind::EmptySweep,
            ScanError::InvalidTarget { .. } => FaultKind::InvalidTarget,
            ScanError::Sensor(_) => FaultKind::SensorFault,
        }
    }
}

impl From<SensorError> for ScanError {
    fn from(e: SensorError) -> Self {
        ScanError::Sensor(e)
    }
}
