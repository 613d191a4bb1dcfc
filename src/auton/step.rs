//! The unit of work of an autonomous routine.

use std::time::Duration;

use crate::{motion::Waypoint, opcontrol::IntakeState, peripherals::FollowMode};

/// One authored step of a routine.
///
/// Steps are built with the `const` constructors so routines can be
/// declared as static tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoutineStep {
    /// Turn in place. Mirrored by the drivetrain on the right tile.
    Turn {
        /// Angle in degrees, clockwise positive.
        degrees:        f64,
        /// Output cap for this turn, as a fraction of full power.
        velocity_limit: Option<f64>,
    },
    /// Drive straight along the current heading.
    Move {
        /// Distance in inches, negative drives backwards.
        inches:         f64,
        /// Output cap for this move, as a fraction of full power.
        velocity_limit: Option<f64>,
    },
    /// Follow a waypoint path.
    Follow {
        /// Waypoints relative to the pose at the start of the path.
        path:     &'static [Waypoint],
        /// Whether the call waits for the path to finish.
        mode:     FollowMode,
        /// Drive the path backwards.
        reversed: bool,
    },
    /// Wait for a detached path to finish.
    Settle,
    /// Latch the intake in a direction.
    Intake(IntakeState),
    /// Wait for the ball sensor, giving up after `timeout`.
    WaitForBall {
        /// Longest time to wait.
        timeout: Duration,
    },
    /// Do nothing for a while.
    Delay(Duration),
    /// End of the first capture-and-release. The run stops here unless it
    /// was started with `keep_going`.
    Checkpoint,
}

impl RoutineStep {
    /// Turn in place at full power.
    pub const fn turn(degrees: f64) -> Self {
        RoutineStep::Turn {
            degrees,
            velocity_limit: None,
        }
    }

    /// Turn in place, capped at `velocity_limit`.
    pub const fn turn_limited(degrees: f64, velocity_limit: f64) -> Self {
        RoutineStep::Turn {
            degrees,
            velocity_limit: Some(velocity_limit),
        }
    }

    /// Drive straight at full power.
    pub const fn drive(inches: f64) -> Self {
        RoutineStep::Move {
            inches,
            velocity_limit: None,
        }
    }

    /// Drive straight, capped at `velocity_limit`.
    pub const fn drive_limited(inches: f64, velocity_limit: f64) -> Self {
        RoutineStep::Move {
            inches,
            velocity_limit: Some(velocity_limit),
        }
    }

    /// Follow `path` forwards and wait for it to finish.
    pub const fn follow(path: &'static [Waypoint]) -> Self {
        RoutineStep::Follow {
            path,
            mode: FollowMode::Blocking,
            reversed: false,
        }
    }

    /// Start following `path` and move on. Pair with [`RoutineStep::Settle`].
    pub const fn follow_detached(path: &'static [Waypoint]) -> Self {
        RoutineStep::Follow {
            path,
            mode: FollowMode::Detached,
            reversed: false,
        }
    }

    /// Follow `path` backwards and wait for it to finish.
    pub const fn follow_reversed(path: &'static [Waypoint]) -> Self {
        RoutineStep::Follow {
            path,
            mode: FollowMode::Blocking,
            reversed: true,
        }
    }

    /// Latch the intake.
    pub const fn intake(state: IntakeState) -> Self { RoutineStep::Intake(state) }

    /// Wait for the ball sensor for at most `timeout_ms` milliseconds.
    pub const fn wait_for_ball(timeout_ms: u64) -> Self {
        RoutineStep::WaitForBall {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Pause for `ms` milliseconds.
    pub const fn delay(ms: u64) -> Self { RoutineStep::Delay(Duration::from_millis(ms)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &[Waypoint] = &[Waypoint::new(24.0, 0.0, 0.0)];

    #[test]
    fn limited_constructors_carry_the_cap() {
        assert_eq!(RoutineStep::turn_limited(90.0, 0.5), RoutineStep::Turn {
            degrees:        90.0,
            velocity_limit: Some(0.5),
        });
        assert_eq!(RoutineStep::drive(-12.0), RoutineStep::Move {
            inches:         -12.0,
            velocity_limit: None,
        });
        assert_eq!(RoutineStep::drive_limited(6.0, 0.3), RoutineStep::Move {
            inches:         6.0,
            velocity_limit: Some(0.3),
        });
    }

    #[test]
    fn follow_variants() {
        assert_eq!(RoutineStep::follow(PATH), RoutineStep::Follow {
            path:     PATH,
            mode:     FollowMode::Blocking,
            reversed: false,
        });
        assert_eq!(RoutineStep::follow_detached(PATH), RoutineStep::Follow {
            path:     PATH,
            mode:     FollowMode::Detached,
            reversed: false,
        });
        assert_eq!(RoutineStep::follow_reversed(PATH), RoutineStep::Follow {
            path:     PATH,
            mode:     FollowMode::Blocking,
            reversed: true,
        });
    }

    #[test]
    fn timings_are_milliseconds() {
        assert_eq!(RoutineStep::wait_for_ball(1500), RoutineStep::WaitForBall {
            timeout: Duration::from_millis(1500),
        });
        assert_eq!(RoutineStep::delay(250), RoutineStep::Delay(Duration::from_secs_f64(0.25)));
    }
}
