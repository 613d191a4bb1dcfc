//! Point-and-shoot waypoint following.
//!
//! The runner turns to face each waypoint, drives straight to it, and turns
//! to the heading of the last waypoint once the path is done. Position is
//! dead-reckoned from the commanded motions, starting from the first
//! waypoint of every path.
//!
//! # Example
//!
//! ```ignore
//! use changeup::hardware::trajectory::PointShoot;
//!
//! let mut runner = PointShoot::new(drivetrain.clone());
//! runner.follow(PATH, FollowMode::Detached, false, false).await;
//! // ... run the intake while driving ...
//! runner.wait_until_settled().await;
//! ```

use log::debug;
use vexide::task::{Task, spawn};

use super::drivetrain::Differential;
use crate::{
    motion::{MirrorPolicy, Waypoint},
    peripherals::{FollowMode, TrajectoryRunner},
};

/// Distance and angle below which a motion is skipped.
const EPSILON: f64 = 1e-3;

/// One motion of a planned path.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    /// Turn in place, clockwise positive degrees.
    Rotate(f64),
    /// Drive straight, negative inches drive backwards.
    Travel(f64),
}

/// Point-and-shoot trajectory runner.
pub struct PointShoot {
    drive:     Differential,
    limit:     f64,
    in_flight: Option<Task<()>>,
}

impl PointShoot {
    /// Creates a runner driving `drive` at full power.
    pub fn new(drive: Differential) -> Self {
        Self {
            drive,
            limit: 1.0,
            in_flight: None,
        }
    }

    /// Caps the output used while following paths.
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit.clamp(0.0, 1.0);
        self
    }
}

impl TrajectoryRunner for PointShoot {
    async fn follow(
        &mut self,
        path: &[Waypoint],
        mode: FollowMode,
        reversed: bool,
        mirrored: bool,
    ) {
        // One motion at a time on the motors.
        self.wait_until_settled().await;

        let segments = plan(path, reversed, MirrorPolicy::from_active(mirrored));
        debug!("Following {} waypoints as {} motions", path.len(), segments.len());

        match mode {
            FollowMode::Blocking => run(&self.drive, &segments, self.limit).await,
            FollowMode::Detached => {
                let drive = self.drive.clone();
                let limit = self.limit;
                self.in_flight = Some(spawn(async move {
                    run(&drive, &segments, limit).await;
                }));
            }
        }
    }

    async fn wait_until_settled(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.await;
        }
    }
}

async fn run(drive: &Differential, segments: &[Segment], limit: f64) {
    for segment in segments {
        match *segment {
            Segment::Rotate(degrees) => drive.rotate(degrees, limit).await,
            Segment::Travel(inches) => drive.travel(inches, limit).await,
        }
    }
}

/// Turns a path into in-place turns and straight drives.
fn plan(path: &[Waypoint], reversed: bool, mirror: MirrorPolicy) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(first) = path.first() else {
        return segments;
    };

    let mut position = mirror.apply(*first);
    let mut heading = 0.0;
    for waypoint in &path[1..] {
        let target = mirror.apply(*waypoint);
        let distance = position.distance_to(&target);
        if distance < EPSILON {
            continue;
        }

        let mut bearing = (target.y - position.y)
            .atan2(target.x - position.x)
            .to_degrees();
        if reversed {
            bearing += 180.0;
        }
        push_turn(&mut segments, bearing - heading);
        segments.push(Segment::Travel(if reversed { -distance } else { distance }));
        heading = bearing;
        position = target;
    }

    if let Some(last) = path.last() {
        push_turn(&mut segments, mirror.apply(*last).heading - heading);
    }
    segments
}

/// Adds a turn by `counter_clockwise` degrees. Waypoint headings are
/// counter-clockwise positive, drivetrain turns clockwise positive.
fn push_turn(segments: &mut Vec<Segment>, counter_clockwise: f64) {
    let turn = wrap_degrees(counter_clockwise);
    if turn.abs() > EPSILON {
        segments.push(Segment::Rotate(-turn));
    }
}

/// Wraps an angle into `(-180, 180]`.
fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
