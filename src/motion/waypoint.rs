//! Waypoints for the trajectory follower.
//!
//! A [`Waypoint`] is a target pose relative to the pose the robot had when
//! the path started: `x` forward, `y` to the left, `heading` in degrees,
//! counter-clockwise positive. Routines author paths as static slices so
//! nothing is allocated during a match.
//!
//! # Example
//!
//! ```ignore
//! use changeup::motion::Waypoint;
//!
//! const TO_GOAL: &[Waypoint] = &[
//!     Waypoint::origin(),
//!     Waypoint::new(24.0, 12.0, 45.0),
//! ];
//! ```

/// A 2D pose on the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// Forward offset in inches.
    pub x:       f64,
    /// Leftward offset in inches.
    pub y:       f64,
    /// Heading in degrees.
    pub heading: f64,
}

impl Waypoint {
    /// Create a new waypoint using `x`, `y` and `heading`
    pub const fn new(x: f64, y: f64, heading: f64) -> Self { Waypoint { x, y, heading } }

    /// The starting pose of a path
    pub const fn origin() -> Self { Waypoint::new(0.0, 0.0, 0.0) }

    /// Reflect the waypoint across the forward axis
    pub fn mirrored(self) -> Self { Waypoint::new(self.x, -self.y, -self.heading) }

    /// Straight-line distance to another waypoint
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
