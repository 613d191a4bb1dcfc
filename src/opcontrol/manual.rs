//! The driver control tick.
//!
//! Each tick runs three stages, always in this order:
//!
//! 1. Left stick Y and right stick X go straight to arcade drive.
//! 2. Button and sensor edges update the [`IntakeArbiter`], whose output is
//!    sent to the intake.
//! 3. If both combo buttons are held, the tick reports
//!    [`TickOutcome::AutonomousRequested`].
//!
//! The combo is level-triggered with no debounce. The loop never runs the
//! routine itself; the competition dispatcher consumes the request and runs
//! it to completion before the next tick, so a held combo cannot start a
//! second run while one is in flight.

use log::debug;

use super::{
    edge::EdgeDetector,
    intake::{IntakeArbiter, IntakeEdges, IntakeState},
};
use crate::{
    config::{ButtonMap, RobotConfig},
    peripherals::{ControllerSnapshot, Drivetrain, IntakeActuator},
};

/// Result of one driver control tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing else to do this tick.
    Continue,
    /// The combo is held; the selected routine should run now.
    AutonomousRequested,
}

/// State carried between driver control ticks.
#[derive(Debug, Clone)]
pub struct ManualLoop {
    arbiter:      IntakeArbiter,
    buttons:      ButtonMap,
    forward_edge: EdgeDetector,
    reverse_edge: EdgeDetector,
    sensor_edge:  EdgeDetector,
}

impl ManualLoop {
    /// Creates the loop state from the robot configuration.
    pub fn new(config: &RobotConfig) -> Self {
        Self {
            arbiter:      IntakeArbiter::new(config.intake_voltage),
            buttons:      config.buttons,
            forward_edge: EdgeDetector::default(),
            reverse_edge: EdgeDetector::default(),
            sensor_edge:  EdgeDetector::default(),
        }
    }

    /// The latched intake state.
    pub fn intake_state(&self) -> IntakeState { self.arbiter.state() }

    /// Runs one tick against the given inputs and devices.
    pub fn tick<D: Drivetrain, I: IntakeActuator>(
        &mut self,
        input: &ControllerSnapshot,
        sensor_active: bool,
        drive: &mut D,
        intake: &mut I,
    ) -> TickOutcome {
        drive.arcade(input.left_y, input.right_x);

        let edges = IntakeEdges {
            sensor:  self.sensor_edge.update(sensor_active),
            forward: self
                .forward_edge
                .update(input.is_pressed(self.buttons.intake_forward)),
            reverse: self
                .reverse_edge
                .update(input.is_pressed(self.buttons.intake_reverse)),
        };
        intake.set_level(self.arbiter.update(edges));

        if input.all_pressed(&self.buttons.combo) {
            debug!("Autonomous combo held");
            TickOutcome::AutonomousRequested
        } else {
            TickOutcome::Continue
        }
    }
}
