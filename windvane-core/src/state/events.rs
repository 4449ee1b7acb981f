//! Events that trigger phase transitions

use super::machine::FaultKind;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Limit switch hit while homing and released
    HomeFound,
    /// Limit switch hit at the end of the sweep and released
    SweepComplete,
    /// Alignment target step count reached
    TargetReached,
    /// Limit switch hit during alignment and released
    SafetyStop,
    /// Scan aborted
    Abort(FaultKind),
    /// Begin a new scan from a terminal phase
    Restart,
}

impl Event {
    /// Check if this event is raised by the limit switch
    pub fn is_switch_event(&self) -> bool {
        matches!(
            self,
            Event::HomeFound | Event::SweepComplete | Event::SafetyStop
        )
    }

    /// Check if this event indicates a fault
    pub fn is_fault_event(&self) -> bool {
        matches!(self, Event::Abort(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_events() {
        assert!(Event::HomeFound.is_switch_event());
        assert!(Event::SweepComplete.is_switch_event());
        assert!(Event::SafetyStop.is_switch_event());
        assert!(!Event::TargetReached.is_switch_event());
        assert!(!Event::Abort(FaultKind::EmptySweep).is_switch_event());
    }

    #[test]
    fn test_fault_events() {
        assert!(Event::Abort(FaultKind::InvalidTarget).is_fault_event());
        assert!(!Event::Restart.is_fault_event());
    }
}
