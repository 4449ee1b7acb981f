//! Positional actuator trait
//!
//! Abstracts the stepper that rotates the sensor mast. The scan logic only
//! ever asks for one step at a time, so the trait is deliberately small.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Clockwise rotation
    #[default]
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Trait for step-driven positional actuators
///
/// Implementations block for the physical duration of each step. A step
/// command has no failure signal; once issued the motor is assumed to move.
pub trait Actuator {
    /// Set the rotation speed in RPM
    ///
    /// Called once before a scan starts. Affects the time each step takes.
    fn set_rpm(&mut self, rpm: u16);

    /// Get the configured RPM
    fn get_rpm(&self) -> u16;

    /// Issue exactly one step in the given direction
    fn step(&mut self, dir: Direction);

    /// Issue `count` steps in the same direction
    fn step_many(&mut self, dir: Direction, count: u32) {
        for _ in 0..count {
            self.step(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in [Direction::Clockwise, Direction::CounterClockwise] {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_step_many_issues_each_step() {
        struct Counter {
            cw: u32,
            ccw: u32,
        }

        impl Actuator for Counter {
            fn set_rpm(&mut self, _rpm: u16) {}

            fn get_rpm(&self) -> u16 {
                0
            }

            fn step(&mut self, dir: Direction) {
                match dir {
                    Direction::Clockwise => self.cw += 1,
                    Direction::CounterClockwise => self.ccw += 1,
                }
            }
        }

        let mut counter = Counter { cw: 0, ccw: 0 };
        counter.step_many(Direction::CounterClockwise, 400);
        counter.step_many(Direction::Clockwise, 3);
        assert_eq!(counter.ccw, 400);
        assert_eq!(counter.cw, 3);
    }
}
