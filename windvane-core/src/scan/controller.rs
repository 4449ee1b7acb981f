//! Scan controller
//!
//! Runs one blocking scan: home against the limit switch, sweep the full
//! range while sampling the flow sensor, then drive back to the strongest
//! reading.
//!
//! # Phases
//!
//! ```text
//!   Homing ──HomeFound──▶ Sweeping ──SweepComplete──▶ Aligning ──TargetReached/SafetyStop──▶ Done
//!     │                      │                           │
//!     └──────────────────────┴───────Abort(kind)─────────┴──────────────────────────────────▶ Fault
//! ```
//!
//! Every switch activation is followed by exactly `release_margin` steps in
//! the opposite direction so the switch is inactive before the next phase.
//! The switch is polled once per step; there is no other feedback.

use heapless::Vec;

use super::error::ScanError;
use super::peak::PeakTracker;
use super::report::{AlignOutcome, PhaseSummary, ScanReport, MAX_PHASES};
use super::target::alignment_target;
use crate::config::{ConfigError, ScanConfig};
use crate::safety::StepBudget;
use crate::state::{Event, ScanPhase};
use crate::traits::{Actuator, Direction, FlowSensor, LimitSwitch};

/// Scan controller
///
/// Owns the actuator, limit switch and flow sensor for its lifetime. All
/// per-scan bookkeeping (step count, peak, alignment position) is created
/// fresh inside [`scan`](Self::scan), so the controller can run one scan
/// per physical sweep cycle.
pub struct ScanController<A, L, S> {
    actuator: A,
    switch: L,
    sensor: S,
    config: ScanConfig,
    phase: ScanPhase,
}

impl<A: Actuator, L: LimitSwitch, S: FlowSensor> ScanController<A, L, S> {
    /// Create a controller and apply the configured speed to the actuator
    pub fn new(mut actuator: A, switch: L, sensor: S, config: ScanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        actuator.set_rpm(config.rpm);

        Ok(Self {
            actuator,
            switch,
            sensor,
            config,
            phase: ScanPhase::INITIAL,
        })
    }

    /// Current phase
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Get access to the actuator
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Get access to the flow sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get mutable access to the flow sensor (e.g. for velocity readout
    /// once aligned)
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Give the hardware back
    pub fn release(self) -> (A, L, S) {
        (self.actuator, self.switch, self.sensor)
    }

    /// Run a complete scan
    ///
    /// Blocks until the mechanism is parked at the bearing of peak flow or a
    /// fault stops the scan. On error the phase is left at
    /// [`ScanPhase::Fault`] and the mechanism stays wherever it stopped.
    pub fn scan(&mut self) -> Result<ScanReport, ScanError> {
        if self.phase.is_terminal() {
            self.advance(Event::Restart);
        }

        match self.run() {
            Ok(report) => Ok(report),
            Err(e) => {
                self.advance(Event::Abort(e.kind()));
                debug_assert!(self.phase.is_fault());
                Err(e)
            }
        }
    }

    fn run(&mut self) -> Result<ScanReport, ScanError> {
        let mut phases: Vec<PhaseSummary, MAX_PHASES> = Vec::new();
        let release_margin = self.config.release_margin;

        // Homing
        let homing_steps = self.home()?;
        log_phase(
            &mut phases,
            PhaseSummary {
                phase: ScanPhase::Homing,
                steps: homing_steps,
                release_steps: release_margin,
            },
        );

        // Sweeping
        let tracker = self.sweep()?;
        let step_count = tracker.step_count();
        log_phase(
            &mut phases,
            PhaseSummary {
                phase: ScanPhase::Sweeping,
                steps: step_count as u32,
                release_steps: release_margin,
            },
        );

        // Aligning
        let peak = tracker.peak().ok_or(ScanError::EmptySweep)?;
        let target = alignment_target(
            step_count,
            peak.position,
            release_margin,
            self.config.calibration_margin,
        );
        debug!(
            "Peak {} V at step {} of {}, target {}",
            peak.reading, peak.position, step_count, target
        );

        let (aligned_steps, outcome) = self.align(target)?;
        log_phase(
            &mut phases,
            PhaseSummary {
                phase: ScanPhase::Aligning,
                steps: aligned_steps as u32,
                release_steps: match outcome {
                    AlignOutcome::TargetReached => 0,
                    AlignOutcome::SafetyStop { .. } => release_margin,
                },
            },
        );

        Ok(ScanReport {
            homing_steps,
            step_count,
            peak,
            target,
            aligned_steps,
            outcome,
            phases,
        })
    }

    /// Step toward the switch until it activates, then back off
    ///
    /// Returns the number of steps taken before activation.
    fn home(&mut self) -> Result<u32, ScanError> {
        info!("Detecting start position...");
        let dir = self.config.homing_direction;
        debug_assert_eq!(self.phase.travel_direction(dir), Some(dir));

        let mut budget = StepBudget::new(self.config.homing_step_budget);
        debug!("Homing step budget: {}", budget.limit());
        loop {
            if budget.is_exhausted() {
                return Err(ScanError::LimitNotReached {
                    phase: ScanPhase::Homing,
                    steps: budget.used(),
                });
            }

            self.actuator.step(dir);
            budget.record_step();

            if self.switch.is_triggered() {
                break;
            }
        }

        self.release_switch(dir);
        self.advance(Event::HomeFound);
        info!("Start position detected");
        Ok(budget.used())
    }

    /// Cross the range away from home, one reading per step, until the
    /// switch activates at the far edge
    fn sweep(&mut self) -> Result<PeakTracker, ScanError> {
        info!("Scanning...");
        let dir = self.config.sweep_direction();
        debug_assert_eq!(
            self.phase.travel_direction(self.config.homing_direction),
            Some(dir)
        );

        let mut budget = StepBudget::new(self.config.sweep_step_budget);
        debug!("Sweep step budget: {}", budget.limit());
        let mut tracker = PeakTracker::new();

        while !self.switch.is_triggered() {
            if budget.is_exhausted() {
                return Err(ScanError::LimitNotReached {
                    phase: ScanPhase::Sweeping,
                    steps: budget.used(),
                });
            }

            self.actuator.step(dir);
            budget.record_step();

            debug_assert!(self.phase.samples_sensor());
            let reading = self.sensor.read_voltage()?;
            tracker.observe(reading);
        }

        // Switch still held from homing: nothing was sampled, and backing
        // off toward home would press it harder
        if tracker.peak().is_none() {
            return Err(ScanError::EmptySweep);
        }

        self.release_switch(dir);
        self.advance(Event::SweepComplete);
        info!("Scanning complete");
        Ok(tracker)
    }

    /// Step toward home until `target` steps are taken or the switch fires
    ///
    /// Returns the steps taken and how the phase ended.
    fn align(&mut self, target: i32) -> Result<(i32, AlignOutcome), ScanError> {
        info!("Aligning sensor...");
        if target <= 0 {
            return Err(ScanError::InvalidTarget { target });
        }

        let dir = self.config.homing_direction;
        debug_assert_eq!(
            self.phase.travel_direction(self.config.homing_direction),
            Some(dir)
        );

        let mut position: i32 = 0;
        let mut outcome = AlignOutcome::TargetReached;

        while position < target {
            self.actuator.step(dir);
            position += 1;

            if self.switch.is_triggered() {
                warn!("Limit switch hit while aligning at step {} of {}", position, target);
                self.release_switch(dir);
                outcome = AlignOutcome::SafetyStop { at: position };
                break;
            }
        }

        self.advance(match outcome {
            AlignOutcome::TargetReached => Event::TargetReached,
            AlignOutcome::SafetyStop { .. } => Event::SafetyStop,
        });
        info!("Alignment complete");
        Ok((position, outcome))
    }

    /// Back off a switch that activated while moving in `moved`
    fn release_switch(&mut self, moved: Direction) {
        let margin = self.config.release_margin;
        debug!("Releasing limit switch: {} steps", margin);
        self.actuator.step_many(moved.opposite(), u32::from(margin));
    }

    fn advance(&mut self, event: Event) {
        debug_assert!(self.phase.is_moving() || event == Event::Restart);

        if event.is_fault_event() {
            warn!("Scan aborted in {}: {}", self.phase, event);
        } else if event.is_switch_event() {
            debug!("Limit switch cleared: {}", event);
        }
        self.phase = self.phase.transition(event);
    }
}

/// Append to the per-phase step log
///
/// A scan has exactly [`MAX_PHASES`] moving phases, each logged once.
fn log_phase(phases: &mut Vec<PhaseSummary, MAX_PHASES>, summary: PhaseSummary) {
    let pushed = phases.push(summary);
    debug_assert!(pushed.is_ok(), "phase log overflow");
}
