//! ULN2003 unipolar stepper driver
//!
//! Drives a 28BYJ-48 geared stepper through a ULN2003 darlington array.
//! Each coil input (IN1-IN4) is a plain GPIO output; the driver walks the
//! 8-phase half-step sequence and blocks between steps to hold the
//! configured speed.
//!
//! # Timing
//!
//! The 28BYJ-48 has 64 half-steps per rotor turn behind a 63.684:1 gearbox,
//! so one output revolution is about 4076 half-steps (the often quoted 4096
//! assumes an even 64:1). The inter-step delay is:
//!
//! ```text
//! delay_us = 60_000_000 / (rpm * 4076)
//! ```
//!
//! At the default 16 RPM that is 920 µs per step, the same interval the
//! flow sensor filter is tuned for.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use windvane_core::config::{step_interval_us, COIL_COUNT};
use windvane_core::traits::{Actuator, Direction};

/// Half-step coil pattern (IN1, IN2, IN3, IN4)
const HALF_STEP_SEQUENCE: [[bool; COIL_COUNT]; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// ULN2003 stepper driver
pub struct Uln2003Driver<P, D> {
    coils: [P; COIL_COUNT],
    delay: D,
    rpm: u16,
    /// Delay between steps in microseconds
    step_delay_us: u32,
    /// Index into the half-step sequence
    phase: usize,
    /// Net steps since creation (clockwise positive)
    position: i32,
    /// Whether any coil is currently driven
    energized: bool,
}

impl<P, D> Uln2003Driver<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Create a new driver with all coils off
    ///
    /// # Arguments
    /// - `coils`: outputs wired to IN1-IN4, in order
    /// - `delay`: blocking delay provider for step timing
    /// - `rpm`: initial output shaft speed
    pub fn new(coils: [P; COIL_COUNT], delay: D, rpm: u16) -> Self {
        let mut driver = Self {
            coils,
            delay,
            rpm: 0,
            step_delay_us: 0,
            phase: 0,
            position: 0,
            energized: false,
        };
        driver.set_rpm(rpm);
        driver.release();
        driver
    }

    /// Current inter-step delay in microseconds
    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    /// Net steps taken since creation (clockwise positive)
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Check if the coils are driven
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// De-energize all coils
    ///
    /// The motor loses holding torque. The sequence position is kept so the
    /// next step continues from the same phase.
    pub fn release(&mut self) {
        for coil in self.coils.iter_mut() {
            match coil.set_low() {
                Ok(()) => {}
                Err(e) => match e {},
            }
        }
        self.energized = false;
    }

    /// Return the coil pins and delay
    pub fn into_parts(self) -> ([P; COIL_COUNT], D) {
        (self.coils, self.delay)
    }

    fn apply_phase(&mut self) {
        let pattern = HALF_STEP_SEQUENCE[self.phase];
        for (coil, &on) in self.coils.iter_mut().zip(pattern.iter()) {
            let result = if on { coil.set_high() } else { coil.set_low() };
            match result {
                Ok(()) => {}
                Err(e) => match e {},
            }
        }
        self.energized = true;
    }
}

impl<P, D> Actuator for Uln2003Driver<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    fn set_rpm(&mut self, rpm: u16) {
        self.rpm = rpm;
        self.step_delay_us = step_interval_us(rpm);
    }

    fn get_rpm(&self) -> u16 {
        self.rpm
    }

    fn step(&mut self, dir: Direction) {
        let len = HALF_STEP_SEQUENCE.len();
        match dir {
            Direction::Clockwise => {
                self.phase = (self.phase + 1) % len;
                self.position = self.position.wrapping_add(1);
            }
            Direction::CounterClockwise => {
                self.phase = (self.phase + len - 1) % len;
                self.position = self.position.wrapping_sub(1);
            }
        }

        self.apply_phase();
        self.delay.delay_us(self.step_delay_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;
    use windvane_core::config::STEPS_PER_REV;

    /// Mock GPIO pin for testing
    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }
    }

    /// Delay that only accumulates the requested time
    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    fn driver(rpm: u16) -> Uln2003Driver<MockPin, MockDelay> {
        Uln2003Driver::new(Default::default(), MockDelay::default(), rpm)
    }

    fn pattern(driver: &Uln2003Driver<MockPin, MockDelay>) -> [bool; COIL_COUNT] {
        let mut out = [false; COIL_COUNT];
        for (o, coil) in out.iter_mut().zip(driver.coils.iter()) {
            *o = coil.high;
        }
        out
    }

    #[test]
    fn test_step_delay() {
        let mut driver = driver(16);
        assert_eq!(driver.step_delay_us(), 920);

        driver.set_rpm(10);
        assert_eq!(driver.step_delay_us(), 1472);
        assert_eq!(driver.get_rpm(), 10);
    }

    #[test]
    fn test_starts_released() {
        let driver = driver(16);
        assert!(!driver.is_energized());
        assert_eq!(pattern(&driver), [false; COIL_COUNT]);
        assert_eq!(driver.get_rpm(), 16);
    }

    #[test]
    fn test_clockwise_walks_sequence() {
        let mut driver = driver(16);
        for i in 1..=8 {
            driver.step(Direction::Clockwise);
            assert_eq!(pattern(&driver), HALF_STEP_SEQUENCE[i % 8]);
        }
        assert_eq!(driver.position(), 8);
    }

    #[test]
    fn test_counter_clockwise_walks_back() {
        let mut driver = driver(16);
        driver.step(Direction::CounterClockwise);
        assert_eq!(pattern(&driver), HALF_STEP_SEQUENCE[7]);
        driver.step(Direction::CounterClockwise);
        assert_eq!(pattern(&driver), HALF_STEP_SEQUENCE[6]);
        assert_eq!(driver.position(), -2);
    }

    #[test]
    fn test_reversal_returns_to_same_phase() {
        let mut driver = driver(16);
        driver.step_many(Direction::Clockwise, 5);
        let before = pattern(&driver);
        driver.step(Direction::Clockwise);
        driver.step(Direction::CounterClockwise);
        assert_eq!(pattern(&driver), before);
        assert_eq!(driver.position(), 5);
    }

    #[test]
    fn test_step_blocks_for_delay() {
        let mut driver = driver(16);
        driver.step_many(Direction::Clockwise, 10);
        assert_eq!(driver.delay.total_ns, 10 * 920 * 1000);

        driver.set_rpm(8);
        driver.step(Direction::Clockwise);
        assert_eq!(driver.delay.total_ns, 10 * 920 * 1000 + 1840 * 1000);
    }

    #[test]
    fn test_release_keeps_phase() {
        let mut driver = driver(16);
        driver.step_many(Direction::Clockwise, 3);
        assert!(driver.is_energized());

        driver.release();
        assert!(!driver.is_energized());
        assert_eq!(pattern(&driver), [false; COIL_COUNT]);

        driver.step(Direction::Clockwise);
        assert_eq!(pattern(&driver), HALF_STEP_SEQUENCE[4]);
    }

    #[test]
    fn test_full_revolution() {
        let mut driver = driver(16);
        driver.step_many(Direction::CounterClockwise, STEPS_PER_REV);
        assert_eq!(driver.position(), -(STEPS_PER_REV as i32));
        // 4076 = 509 * 8 + 4: a revolution ends half way through the sequence
        assert_eq!(pattern(&driver), HALF_STEP_SEQUENCE[4]);
    }
}
