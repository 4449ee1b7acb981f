//! Scan phase definition
//!
//! Every step the controller issues is a function of the current phase.

use super::events::Event;
use crate::traits::Direction;

/// Scan phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanPhase {
    /// Driving toward the limit switch to find the reference edge
    Homing,
    /// Crossing the full range while sampling the sensor
    Sweeping,
    /// Driving back toward the recorded peak
    Aligning,
    /// Scan finished; mechanism parked at the peak bearing
    Done,
    /// Scan aborted; mechanism position is wherever the fault left it
    Fault(FaultKind),
}

/// Reasons a scan can abort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Step budget exhausted before the limit switch activated
    LimitNotReached,
    /// Sweep ended before any reading was taken
    EmptySweep,
    /// Alignment target was zero or negative
    InvalidTarget,
    /// Flow sensor read failed
    SensorFault,
}

impl ScanPhase {
    /// Phase a fresh scan starts in
    pub const INITIAL: Self = ScanPhase::Homing;

    /// Direction this phase travels in, given the homing direction
    ///
    /// Homing and aligning move toward the reference edge; sweeping moves
    /// away from it. Terminal phases do not move.
    pub fn travel_direction(&self, homing: Direction) -> Option<Direction> {
        match self {
            ScanPhase::Homing | ScanPhase::Aligning => Some(homing),
            ScanPhase::Sweeping => Some(homing.opposite()),
            ScanPhase::Done | ScanPhase::Fault(_) => None,
        }
    }

    /// Check if this phase takes a sensor reading per step
    pub fn samples_sensor(&self) -> bool {
        matches!(self, ScanPhase::Sweeping)
    }

    /// Check if this phase issues steps
    pub fn is_moving(&self) -> bool {
        matches!(
            self,
            ScanPhase::Homing | ScanPhase::Sweeping | ScanPhase::Aligning
        )
    }

    /// Check if this is a fault phase
    pub fn is_fault(&self) -> bool {
        matches!(self, ScanPhase::Fault(_))
    }

    /// Check if the scan has ended, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanPhase::Done | ScanPhase::Fault(_))
    }

    /// Process an event and return the next phase
    ///
    /// This is the core transition logic. Events that do not apply to the
    /// current phase leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use ScanPhase::*;

        match (self, event) {
            // Limit found and released
            (Homing, HomeFound) => Sweeping,

            // Far edge found and released
            (Sweeping, SweepComplete) => Aligning,

            // Alignment ends either way
            (Aligning, TargetReached) => Done,
            (Aligning, SafetyStop) => Done,

            // Faults abort any moving phase
            (Homing | Sweeping | Aligning, Abort(kind)) => Fault(kind),

            // A finished scan may be started again
            (Done | Fault(_), Restart) => Homing,

            // Default: stay in current phase
            _ => self,
        }
    }
}
