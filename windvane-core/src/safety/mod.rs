//! Safety limits
//!
//! Bounds the step-and-poll loops so a dead limit switch cannot spin the
//! motor forever.

pub mod budget;

pub use budget::{BudgetStatus, StepBudget};
