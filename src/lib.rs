//! # Change Up
//!
//! Competition controller for a VEX V5 robot that collects balls and scores
//! them in goals. Built on top of [Vexide](https://vexide.dev), with a
//! hardware-agnostic core that runs and is tested on a host machine.
//!
//! - **Autonomous**: authored routines for the left tile, mirrored for the
//!   right, with sensor-gated waits for each ball.
//! - **Driver control**: arcade drive, a latched intake that stops on its own
//!   when a ball is captured, and a button combo that runs the selected
//!   routine mid-match.
//! - **Pre-match selection**: start side and routine picked with two buttons
//!   on the Brain screen.
//! - **Logging**: console and SD card log through the [`log`] facade.
//!
//! ## Quick Start
//!
//! ```ignore
//! use changeup::{competition::Competition, config::RobotConfig, fs::logger};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let config = RobotConfig::default();
//!     logger::init(config.log_level).expect("Logger init failed");
//!
//!     let selection = SelectionHandle::default();
//!     let mut competition = Competition::new(devices, selection, config);
//!     competition.autonomous().await;
//!     competition.driver().await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`competition`]: mode dispatch between autonomous and driver control.
//! - [`auton`]: routine steps, the authored routines and the sensor gate.
//! - [`opcontrol`]: the driver control tick and the intake state machine.
//! - [`selection`]: start side and routine selection.
//! - [`motion`]: waypoints and left/right mirroring.
//! - [`peripherals`]: the device traits the core is written against.
//! - [`config`]: tunables and their validation.
//! - [`fs`]: logging.
//! - `hardware`: V5 Brain devices, with the `v5` feature.

/// Autonomous routines.
///
/// Provides [`AutonomousProgram`](auton::AutonomousProgram), which runs the
/// step table of the selected routine, and the
/// [`SensorGate`](auton::gate::SensorGate) it waits on.
pub mod auton;

/// Competition mode dispatch.
///
/// Provides [`Competition`](competition::Competition).
pub mod competition;

/// Robot configuration.
///
/// Provides [`RobotConfig`](config::RobotConfig) and its validation.
pub mod config;

/// Filesystem utilities module.
///
/// Contains the logger writing to the console and the Brain's SD card.
pub mod fs;

/// Motion helpers shared by routines and drivetrains.
///
/// - **Waypoints**: poses relative to the start of a path.
/// - **Mirroring**: reflecting left-tile routines for the right tile.
pub mod motion;

/// Operator control module.
///
/// Arcade drive, the latched intake and the autonomous combo, run once per
/// tick by [`ManualLoop`](opcontrol::ManualLoop).
pub mod opcontrol;

/// Device contracts.
///
/// The traits every collaborator implements, and the
/// [`Platform`](peripherals::Platform) that binds them.
pub mod peripherals;

/// Pre-match selection.
///
/// Start side, routine and the screen hints describing them.
pub mod selection;

/// V5 Brain devices.
///
/// Implementations of the [`peripherals`] traits on top of vexide.
#[cfg(feature = "v5")]
pub mod hardware;
