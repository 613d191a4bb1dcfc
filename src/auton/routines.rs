//! Authored autonomous routines.
//!
//! All routines are written for the left starting tile: 24" horizontally
//! from the center home goal, facing away from the wall. Distances are in
//! inches and angles in degrees. The right tile runs the same tables
//! mirrored.
//!
//! Every routine that scores more than one ball puts a
//! [`RoutineStep::Checkpoint`] after its first capture-and-release.

use super::step::RoutineStep;
use crate::{motion::Waypoint, opcontrol::IntakeState, selection::RoutineKind};

/// Steps of the routine `kind`.
pub fn steps_for(kind: RoutineKind) -> &'static [RoutineStep] {
    match kind {
        RoutineKind::Simple => SIMPLE,
        RoutineKind::Complex => COMPLEX,
        RoutineKind::TestDrive => TEST_DRIVE,
        RoutineKind::TestTurn => TEST_TURN,
    }
}

const CAPTURE_TIMEOUT_MS: u64 = 1500;
const SCORE_MS: u64 = 600;
const EJECT_MS: u64 = 500;

// Simple: ball in front of the tile, then the corner goal.

const SIMPLE_FIRST_BALL: &[Waypoint] = &[Waypoint::origin(), Waypoint::new(30.0, 0.0, 0.0)];

const SIMPLE_FIRST_GOAL: &[Waypoint] = &[
    Waypoint::origin(),
    Waypoint::new(10.0, 6.0, 30.0),
    Waypoint::new(18.0, 14.0, 45.0),
];

const SIMPLE_BACK_OUT: &[Waypoint] = &[Waypoint::origin(), Waypoint::new(16.0, 0.0, 0.0)];

const SIMPLE_SECOND_BALL: &[Waypoint] = &[
    Waypoint::origin(),
    Waypoint::new(20.0, -4.0, -10.0),
    Waypoint::new(36.0, -4.0, 0.0),
];

const SIMPLE_SECOND_GOAL: &[Waypoint] = &[Waypoint::origin(), Waypoint::new(22.0, 10.0, 40.0)];

static SIMPLE: &[RoutineStep] = &[
    RoutineStep::intake(IntakeState::Forward),
    RoutineStep::follow(SIMPLE_FIRST_BALL),
    RoutineStep::wait_for_ball(CAPTURE_TIMEOUT_MS),
    RoutineStep::follow(SIMPLE_FIRST_GOAL),
    RoutineStep::delay(SCORE_MS),
    RoutineStep::intake(IntakeState::Stopped),
    RoutineStep::Checkpoint,
    RoutineStep::follow_reversed(SIMPLE_BACK_OUT),
    RoutineStep::turn_limited(-135.0, 0.6),
    RoutineStep::intake(IntakeState::Forward),
    RoutineStep::follow(SIMPLE_SECOND_BALL),
    RoutineStep::wait_for_ball(CAPTURE_TIMEOUT_MS),
    RoutineStep::follow(SIMPLE_SECOND_GOAL),
    RoutineStep::delay(SCORE_MS),
    RoutineStep::intake(IntakeState::Stopped),
];

// Complex: U-turn into the home goal, pull a ball out, carry it to the
// center, then collect and eject two more.

const COMPLEX_TO_CENTER: &[Waypoint] = &[
    Waypoint::origin(),
    Waypoint::new(18.0, -12.0, -45.0),
    Waypoint::new(40.0, -20.0, 0.0),
];

const COMPLEX_SECOND_BALL: &[Waypoint] = &[Waypoint::origin(), Waypoint::new(24.0, 0.0, 0.0)];

const COMPLEX_BACK_TO_GOAL: &[Waypoint] = &[
    Waypoint::origin(),
    Waypoint::new(12.0, 8.0, 30.0),
    Waypoint::new(24.0, 12.0, 90.0),
];

const COMPLEX_THIRD_BALL: &[Waypoint] = &[
    Waypoint::origin(),
    Waypoint::new(14.0, -10.0, -35.0),
    Waypoint::new(30.0, -14.0, 0.0),
];

static COMPLEX: &[RoutineStep] = &[
    RoutineStep::drive(24.0),
    RoutineStep::turn(90.0),
    RoutineStep::drive(24.0),
    RoutineStep::turn(90.0),
    RoutineStep::intake(IntakeState::Forward),
    RoutineStep::drive(24.0),
    RoutineStep::wait_for_ball(CAPTURE_TIMEOUT_MS),
    RoutineStep::drive(-24.0),
    RoutineStep::intake(IntakeState::Stopped),
    RoutineStep::follow_detached(COMPLEX_TO_CENTER),
    RoutineStep::Settle,
    RoutineStep::intake(IntakeState::Reverse),
    RoutineStep::delay(EJECT_MS),
    RoutineStep::intake(IntakeState::Stopped),
    RoutineStep::Checkpoint,
    RoutineStep::turn_limited(-90.0, 0.5),
    RoutineStep::intake(IntakeState::Forward),
    RoutineStep::follow(COMPLEX_SECOND_BALL),
    RoutineStep::wait_for_ball(CAPTURE_TIMEOUT_MS),
    RoutineStep::follow_reversed(COMPLEX_BACK_TO_GOAL),
    RoutineStep::drive_limited(6.0, 0.4),
    RoutineStep::delay(SCORE_MS),
    RoutineStep::intake(IntakeState::Stopped),
    RoutineStep::drive(-10.0),
    RoutineStep::turn_limited(120.0, 0.5),
    RoutineStep::intake(IntakeState::Forward),
    RoutineStep::follow_detached(COMPLEX_THIRD_BALL),
    RoutineStep::wait_for_ball(CAPTURE_TIMEOUT_MS * 2),
    RoutineStep::Settle,
    RoutineStep::intake(IntakeState::Reverse),
    RoutineStep::delay(EJECT_MS),
    RoutineStep::intake(IntakeState::Stopped),
];

static TEST_DRIVE: &[RoutineStep] = &[RoutineStep::drive(24.0), RoutineStep::drive(-24.0)];

static TEST_TURN: &[RoutineStep] = &[
    RoutineStep::turn_limited(90.0, 0.5),
    RoutineStep::turn_limited(-90.0, 0.5),
];
