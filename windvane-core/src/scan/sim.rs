//! Simulated mast for scan tests
//!
//! One shared bench stands behind the actuator, switch and sensor handles
//! so that steps move the mechanism the switch and sensor observe.

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::traits::{Actuator, Direction, FlowSensor, LimitSwitch, SensorError};

/// When the limit switch reads active
pub enum SwitchModel {
    /// Active whenever the total number of issued steps is listed
    AtSteps(Vec<usize>),
    /// Active at or beyond either mechanical edge
    Edges { low: i32, high: i32 },
    /// Never active (broken switch)
    Never,
}

/// What the flow sensor returns
pub enum SensorModel {
    /// Readings in order, one per read, 0.0 once exhausted
    Sequence(Vec<f32>),
    /// Reading as a function of mechanism position
    Profile(fn(i32) -> f32),
}

/// Shared simulation state
pub struct Bench {
    /// Every step issued, in order
    pub steps: Vec<Direction>,
    /// Mechanism position, counter-clockwise positive
    pub position: i32,
    /// Last RPM applied
    pub rpm: u16,
    /// Sensor reads so far
    pub reads: usize,
    /// Read index that fails with a conversion error
    pub read_error_at: Option<usize>,
    switch: SwitchModel,
    sensor: SensorModel,
}

impl Bench {
    /// Steps issued in one direction
    pub fn count(&self, dir: Direction) -> usize {
        self.steps.iter().filter(|&&d| d == dir).count()
    }

    /// Consecutive same-direction runs of steps
    pub fn runs(&self) -> Vec<(Direction, usize)> {
        let mut runs: Vec<(Direction, usize)> = Vec::new();
        for &dir in &self.steps {
            match runs.last_mut() {
                Some((last, n)) if *last == dir => *n += 1,
                _ => runs.push((dir, 1)),
            }
        }
        runs
    }
}

pub type Shared = Rc<RefCell<Bench>>;

pub struct SimActuator(Shared);
pub struct SimSwitch(Shared);
pub struct SimSensor(Shared);

/// Build a bench and the three hardware handles onto it
pub fn bench(
    switch: SwitchModel,
    sensor: SensorModel,
    position: i32,
) -> (SimActuator, SimSwitch, SimSensor, Shared) {
    let shared = Rc::new(RefCell::new(Bench {
        steps: Vec::new(),
        position,
        rpm: 0,
        reads: 0,
        read_error_at: None,
        switch,
        sensor,
    }));

    (
        SimActuator(shared.clone()),
        SimSwitch(shared.clone()),
        SimSensor(shared.clone()),
        shared,
    )
}

impl Actuator for SimActuator {
    fn set_rpm(&mut self, rpm: u16) {
        self.0.borrow_mut().rpm = rpm;
    }

    fn get_rpm(&self) -> u16 {
        self.0.borrow().rpm
    }

    fn step(&mut self, dir: Direction) {
        let mut bench = self.0.borrow_mut();
        bench.steps.push(dir);
        bench.position += match dir {
            Direction::Clockwise => -1,
            Direction::CounterClockwise => 1,
        };
    }
}

impl LimitSwitch for SimSwitch {
    fn is_triggered(&mut self) -> bool {
        let bench = self.0.borrow();
        match &bench.switch {
            SwitchModel::AtSteps(at) => at.contains(&bench.steps.len()),
            SwitchModel::Edges { low, high } => {
                bench.position <= *low || bench.position >= *high
            }
            SwitchModel::Never => false,
        }
    }
}

impl FlowSensor for SimSensor {
    fn read_voltage(&mut self) -> Result<f32, SensorError> {
        let mut bench = self.0.borrow_mut();
        let index = bench.reads;
        bench.reads += 1;

        if bench.read_error_at == Some(index) {
            return Err(SensorError::ConversionError);
        }

        Ok(match &bench.sensor {
            SensorModel::Sequence(values) => values.get(index).copied().unwrap_or(0.0),
            SensorModel::Profile(f) => f(bench.position),
        })
    }

    fn read_velocity(&mut self) -> Result<f32, SensorError> {
        self.read_voltage()
    }
}
