//! Operator control for the driver-controlled period.
//!
//! # Features
//!
//! - **Arcade drive**: left stick forward/backward, right stick turning.
//! - **Latched intake**: one button toggles forward, another toggles reverse,
//!   and the ball sensor stops a forward-running intake on capture.
//! - **Autonomous combo**: holding two buttons runs the selected routine.
//!
//! # Example
//!
//! ```ignore
//! use changeup::opcontrol::{ManualLoop, TickOutcome};
//!
//! let mut manual = ManualLoop::new(&config);
//! loop {
//!     let input = controller.snapshot();
//!     let sensor = ball_switch.is_active();
//!     let outcome = manual.tick(&input, sensor, &mut drive, &mut intake);
//!     if outcome == TickOutcome::AutonomousRequested {
//!         // hand over to the dispatcher
//!     }
//!     sleep(config.tick_interval).await;
//! }
//! ```

/// Rising-edge detection.
///
/// Provides [`EdgeDetector`](edge::EdgeDetector).
pub mod edge;

/// Intake state machine.
///
/// Provides [`IntakeArbiter`](intake::IntakeArbiter) and the
/// [`IntakeCommand`](intake::IntakeCommand) it emits.
pub mod intake;

/// Driver control tick.
///
/// Provides [`ManualLoop`](manual::ManualLoop).
pub mod manual;

pub use edge::EdgeDetector;
pub use intake::{IntakeArbiter, IntakeCommand, IntakeEdges, IntakeState};
pub use manual::{ManualLoop, TickOutcome};
