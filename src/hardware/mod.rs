//! V5 Brain implementations of the device traits.
//!
//! Device errors are logged and absorbed here; the core never sees them.
//!
//! # Example
//!
//! ```ignore
//! use changeup::{hardware::*, peripherals::Devices};
//!
//! let drivetrain = drivetrain::Differential::new(left, right, DriveGeometry::default());
//! let devices: Devices<V5> = Devices {
//!     trajectory: trajectory::PointShoot::new(drivetrain.clone()),
//!     drive:      drivetrain,
//!     intake:     intake::MotorIntake::new([intake_left, intake_right]),
//!     sensor:     sensor::LimitSwitch::new(AdiDigitalIn::new(peripherals.adi_a)),
//!     input:      controller::PrimaryController::new(peripherals.primary_controller),
//!     clock:      clock::BrainClock,
//! };
//! ```

use crate::peripherals::Platform;

/// Program uptime and sleep.
pub mod clock;

/// The primary controller.
pub mod controller;

/// Hint text and touch selection on the Brain screen.
pub mod display;

/// Differential drivetrain with encoder moves and turns.
///
/// Provides [`Differential`](drivetrain::Differential).
pub mod drivetrain;

/// Intake motor group.
pub mod intake;

/// Ball detection limit switch.
pub mod sensor;

/// Point-and-shoot waypoint runner.
///
/// Provides [`PointShoot`](trajectory::PointShoot).
pub mod trajectory;

/// The V5 Brain platform.
pub struct V5;

impl Platform for V5 {
    type Clock = clock::BrainClock;
    type Drive = drivetrain::Differential;
    type Input = controller::PrimaryController;
    type Intake = intake::MotorIntake;
    type Sensor = sensor::LimitSwitch;
    type Trajectory = trajectory::PointShoot;
}
