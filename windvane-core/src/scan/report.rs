//! Scan results

use heapless::Vec;

use super::peak::Peak;
use crate::state::ScanPhase;

/// Number of moving phases in a scan
pub const MAX_PHASES: usize = 3;

/// How the alignment phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlignOutcome {
    /// Every target step was taken
    TargetReached,
    /// Limit switch activated after `at` steps; alignment cut short
    SafetyStop {
        /// Aligning steps taken when the switch fired
        at: i32,
    },
}

/// Steps issued in one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseSummary {
    /// Phase the steps belong to
    pub phase: ScanPhase,
    /// Steps issued by the phase loop itself
    pub steps: u32,
    /// Steps issued to back off the limit switch
    pub release_steps: u16,
}

impl PhaseSummary {
    /// Total steps including the release
    pub fn total(&self) -> u32 {
        self.steps + u32::from(self.release_steps)
    }
}

/// Outcome of a completed scan
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanReport {
    /// Steps taken before the switch activated while homing
    pub homing_steps: u32,
    /// Steps taken during the sweep
    pub step_count: i32,
    /// Strongest reading and where it was seen
    pub peak: Peak,
    /// Alignment step target
    pub target: i32,
    /// Alignment steps actually taken
    pub aligned_steps: i32,
    /// How alignment ended
    pub outcome: AlignOutcome,
    /// Per-phase step log in execution order
    pub phases: Vec<PhaseSummary, MAX_PHASES>,
}

impl ScanReport {
    /// Check if the mechanism reached the alignment target
    pub fn reached_target(&self) -> bool {
        self.outcome == AlignOutcome::TargetReached
    }

    /// Total steps issued over the whole scan
    pub fn total_steps(&self) -> u32 {
        self.phases.iter().map(PhaseSummary::total).sum()
    }

    /// Summary for a given phase
    pub fn phase(&self, phase: ScanPhase) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.phase == phase)
    }
}
