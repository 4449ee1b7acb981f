//! Limit switch trait

/// Trait for the binary home/limit switch
///
/// Polled once per step; there is no interrupt or edge latch.
pub trait LimitSwitch {
    /// Check if the switch is currently activated
    fn is_triggered(&mut self) -> bool;
}
