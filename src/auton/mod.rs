//! Autonomous routine execution.
//!
//! An autonomous run executes the step table of one
//! [`RoutineKind`](crate::selection::RoutineKind) strictly in order on the
//! caller's task. The run:
//!
//! - takes the start side once, as a [`MirrorPolicy`], and tells the
//!   drivetrain to mirror turns and every trajectory to mirror waypoints;
//! - drives the intake directly;
//! - waits for the ball sensor through the [`SensorGate`](gate::SensorGate);
//! - stops at the routine's checkpoint unless `keep_going` is set.
//!
//! There is no retry and no error path. A gate that times out is logged
//! and the next step runs anyway; match time is bounded and a missed ball
//! is cheaper than a stalled routine.
//!
//! # Example
//!
//! ```ignore
//! use changeup::auton::AutonomousProgram;
//!
//! let program = AutonomousProgram::new(&config);
//! let report = program.run(&mut devices, selection.snapshot(), true).await;
//! info!("{:?}", report);
//! ```

use log::{debug, info};

use crate::{
    config::RobotConfig,
    motion::MirrorPolicy,
    peripherals::{Clock, Devices, Drivetrain, IntakeActuator, Platform, TrajectoryRunner},
    selection::{RoutineKind, RunSelection},
};

/// Sensor-gated waits.
///
/// Provides [`SensorGate`](gate::SensorGate).
pub mod gate;

/// Authored step tables.
pub mod routines;

/// Routine steps.
///
/// Provides [`RoutineStep`](step::RoutineStep).
pub mod step;

use gate::{DetectionOutcome, SensorGate};
use step::RoutineStep;

/// Summary of one autonomous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Routine that ran.
    pub routine:               RoutineKind,
    /// Whether the run was mirrored.
    pub mirrored:              bool,
    /// Steps executed, including the checkpoint if the run stopped there.
    pub steps_run:             usize,
    /// Gate waits that saw a ball.
    pub captures:              usize,
    /// Gate waits that timed out.
    pub timeouts:              usize,
    /// Whether the run ended at the checkpoint.
    pub stopped_at_checkpoint: bool,
}

/// Runs authored routines against a set of devices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutonomousProgram {
    gate:           SensorGate,
    intake_voltage: f64,
}

impl AutonomousProgram {
    /// Creates a program from the robot configuration.
    pub fn new(config: &RobotConfig) -> Self {
        Self {
            gate:           SensorGate::from_config(&config.gate),
            intake_voltage: config.intake_voltage,
        }
    }

    /// Runs the selected routine to completion or to its checkpoint.
    pub async fn run<P: Platform>(
        &self,
        devices: &mut Devices<P>,
        selection: RunSelection,
        keep_going: bool,
    ) -> RunReport {
        let mirror: MirrorPolicy = selection.mirror;
        let steps = routines::steps_for(selection.routine);
        info!(
            "Autonomous {} from {} ({} steps, keep going: {})",
            selection.routine,
            selection.side,
            steps.len(),
            keep_going
        );

        let mut report = RunReport {
            routine:               selection.routine,
            mirrored:              mirror.active(),
            steps_run:             0,
            captures:              0,
            timeouts:              0,
            stopped_at_checkpoint: false,
        };

        devices.drive.set_mirrored(mirror.active());

        for (index, step) in steps.iter().enumerate() {
            debug!("Step {}: {:?}", index, step);
            report.steps_run += 1;

            match *step {
                RoutineStep::Turn {
                    degrees,
                    velocity_limit,
                } => devices.drive.turn(degrees, velocity_limit).await,
                RoutineStep::Move {
                    inches,
                    velocity_limit,
                } => match velocity_limit {
                    Some(limit) => {
                        devices.drive.set_velocity_limit(limit);
                        devices.drive.move_straight(inches).await;
                        devices.drive.reset_velocity_limit();
                    }
                    None => devices.drive.move_straight(inches).await,
                },
                RoutineStep::Follow {
                    path,
                    mode,
                    reversed,
                } => {
                    devices
                        .trajectory
                        .follow(path, mode, reversed, mirror.active())
                        .await
                }
                RoutineStep::Settle => devices.trajectory.wait_until_settled().await,
                RoutineStep::Intake(state) => {
                    devices
                        .intake
                        .set_level(state.command(self.intake_voltage))
                }
                RoutineStep::WaitForBall { timeout } => {
                    match self
                        .gate
                        .wait_for_detection(&mut devices.sensor, &devices.clock, timeout)
                        .await
                    {
                        DetectionOutcome::Detected => report.captures += 1,
                        DetectionOutcome::TimedOut => report.timeouts += 1,
                    }
                }
                RoutineStep::Delay(duration) => devices.clock.sleep(duration).await,
                RoutineStep::Checkpoint => {
                    if !keep_going {
                        info!("Autonomous {} stopped at checkpoint", selection.routine);
                        report.stopped_at_checkpoint = true;
                        return report;
                    }
                }
            }
        }

        info!(
            "Autonomous {} finished ({} captured, {} timed out)",
            selection.routine, report.captures, report.timeouts
        );
        report
    }
}
