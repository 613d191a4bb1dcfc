//! Collaborator contracts consumed by the competition controller.
//!
//! The controller never talks to hardware directly. Every motor, sensor,
//! controller and screen is reached through one of the traits below, and a
//! [`Platform`] binds one implementation of each together. The V5 Brain
//! adapters live in [`crate::hardware`] (behind the `v5` feature); tests use
//! the simulated platform in `sim`.
//!
//! # Traits
//!
//! - [`Drivetrain`]: arcade input for driver control plus turn/move primitives.
//! - [`TrajectoryRunner`]: follows a list of waypoints, blocking or detached.
//! - [`IntakeActuator`]: sets the intake motor output.
//! - [`DetectionSensor`]: the ball detection switch.
//! - [`OperatorInput`]: the driver's controller.
//! - [`Clock`]: time source and sleep.
//! - [`HintDisplay`]: text lines on the Brain screen.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use crate::{motion::Waypoint, opcontrol::IntakeCommand};

/// Controller button and snapshot types.
///
/// Provides [`ControllerButton`](controller::ControllerButton) and
/// [`ControllerSnapshot`](controller::ControllerSnapshot).
pub mod controller;

/// Simulated collaborators for host tests.
#[cfg(test)]
pub(crate) mod sim;

pub use controller::{ControllerButton, ControllerSnapshot};

/// How a trajectory call returns to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowMode {
    /// Returns once the robot has driven through every waypoint.
    Blocking,
    /// Starts the motion and returns immediately. Join it with
    /// [`TrajectoryRunner::wait_until_settled`].
    Detached,
}

/// Motion primitives of the drivetrain.
///
/// Implementations own velocity limiting and turn mirroring; the controller
/// only issues commands.
pub trait Drivetrain {
    /// Drives with arcade inputs, both in `[-1.0, 1.0]`.
    fn arcade(&mut self, forward: f64, turn: f64);

    /// Rotates in place by `degrees` (positive is clockwise, before mirroring).
    ///
    /// `velocity_limit` temporarily caps the output for this turn only.
    async fn turn(&mut self, degrees: f64, velocity_limit: Option<f64>);

    /// Drives straight along the current heading by `inches`.
    async fn move_straight(&mut self, inches: f64);

    /// Flips the sign of every following turn when `true`.
    fn set_mirrored(&mut self, mirrored: bool);

    /// Caps the output of every following motion until reset.
    fn set_velocity_limit(&mut self, limit: f64);

    /// Restores the default output cap.
    fn reset_velocity_limit(&mut self);
}

/// Waypoint follower.
pub trait TrajectoryRunner {
    /// Drives through `path` in order. Waypoints are relative to the pose the
    /// robot had when the path starts.
    ///
    /// When `mirrored` is set the runner reflects every waypoint across the
    /// robot's forward axis. When `reversed` is set the robot drives the path
    /// backwards.
    async fn follow(
        &mut self,
        path: &[Waypoint],
        mode: FollowMode,
        reversed: bool,
        mirrored: bool,
    );

    /// Waits for a detached follow to finish. Returns immediately when nothing
    /// is in flight.
    async fn wait_until_settled(&mut self);
}

/// The intake motor group.
pub trait IntakeActuator {
    /// Sets the motor output. Idempotent.
    fn set_level(&mut self, command: IntakeCommand);
}

/// The ball detection sensor.
pub trait DetectionSensor {
    /// Current state of the sensor. Read failures report `false`.
    fn is_active(&mut self) -> bool;
}

/// The driver's controller.
pub trait OperatorInput {
    /// Reads the current stick positions and button levels.
    fn snapshot(&mut self) -> ControllerSnapshot;
}

/// Time source used by every wait in the controller.
pub trait Clock {
    /// Time elapsed since the program started.
    fn now(&self) -> Duration;

    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Brain screen text output used for selection hints.
pub trait HintDisplay {
    /// Replaces the text of `line`.
    fn set_line(&mut self, line: u8, text: &str);
}

/// Binds one implementation of every collaborator.
///
/// Implementors are usually zero-sized marker types; the devices themselves
/// are held in [`Devices`].
///
/// # Example
///
/// ```ignore
/// pub struct V5;
///
/// impl Platform for V5 {
///     type Drive = Differential;
///     type Trajectory = PointShoot;
///     type Intake = MotorIntake;
///     type Sensor = LimitSwitch;
///     type Input = PrimaryController;
///     type Clock = BrainClock;
/// }
/// ```
pub trait Platform {
    /// Drivetrain type.
    type Drive: Drivetrain;
    /// Trajectory follower type.
    type Trajectory: TrajectoryRunner;
    /// Intake motor type.
    type Intake: IntakeActuator;
    /// Ball sensor type.
    type Sensor: DetectionSensor;
    /// Controller type.
    type Input: OperatorInput;
    /// Clock type.
    type Clock: Clock;
}

/// The set of devices the controller drives.
///
/// Fields are public so control code can borrow several devices at once.
pub struct Devices<P: Platform> {
    /// The drivetrain.
    pub drive:      P::Drive,
    /// The trajectory follower.
    pub trajectory: P::Trajectory,
    /// The intake motors.
    pub intake:     P::Intake,
    /// The ball sensor.
    pub sensor:     P::Sensor,
    /// The driver's controller.
    pub input:      P::Input,
    /// The clock.
    pub clock:      P::Clock,
}
