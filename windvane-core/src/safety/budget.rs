//! Step budget implementation
//!
//! Counts steps issued while waiting for the limit switch and reports when
//! the allowance is spent.

use crate::config::STEPS_PER_REV;

/// Default step allowance for homing and sweeping
///
/// Two full output revolutions.
pub const DEFAULT_STEP_BUDGET: u32 = 2 * STEPS_PER_REV;

/// Budget status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BudgetStatus {
    /// More steps may be issued
    Ok,
    /// Allowance spent
    Exhausted,
}

/// Step budget for a single phase
///
/// A budget without a limit never exhausts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBudget {
    /// Maximum steps, or None for unbounded
    limit: Option<u32>,
    /// Steps recorded so far
    used: u32,
}

impl StepBudget {
    /// Create a budget with an optional limit
    pub fn new(limit: Option<u32>) -> Self {
        Self { limit, used: 0 }
    }

    /// Record one issued step
    pub fn record_step(&mut self) {
        self.used = self.used.saturating_add(1);
    }

    /// Check the budget
    pub fn check(&self) -> BudgetStatus {
        match self.limit {
            Some(limit) if self.used >= limit => BudgetStatus::Exhausted,
            _ => BudgetStatus::Ok,
        }
    }

    /// Check if the allowance is spent
    pub fn is_exhausted(&self) -> bool {
        self.check() == BudgetStatus::Exhausted
    }

    /// Steps recorded so far
    pub fn used(&self) -> u32 {
        self.used
    }

    /// Configured limit
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }
}
