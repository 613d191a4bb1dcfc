//! Intake motor group.

use heapless::Vec;
use log::warn;
use vexide::prelude::Motor;

use crate::{opcontrol::IntakeCommand, peripherals::IntakeActuator};

/// Most motors an intake group holds.
pub const MAX_INTAKE_MOTORS: usize = 4;

/// Intake rollers driven together at one voltage.
pub struct MotorIntake {
    motors: Vec<Motor, MAX_INTAKE_MOTORS>,
}

impl MotorIntake {
    /// Creates the group. Motors past [`MAX_INTAKE_MOTORS`] are dropped
    /// with a warning.
    pub fn new(motors: impl IntoIterator<Item = Motor>) -> Self {
        let mut group = Vec::new();
        for motor in motors {
            if group.push(motor).is_err() {
                warn!("Intake group is full, ignoring motor");
            }
        }
        Self { motors: group }
    }
}

impl IntakeActuator for MotorIntake {
    fn set_level(&mut self, command: IntakeCommand) {
        for motor in self.motors.iter_mut() {
            motor.set_voltage(command.voltage()).unwrap_or_else(|e| {
                warn!("Intake Motor Error: {}", e);
            });
        }
    }
}
