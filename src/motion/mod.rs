//! Motion vocabulary shared by routines and the trajectory follower.
//!
//! This module does not move the robot. It holds the types that describe
//! motion requests:
//!
//! - **Waypoints**: target poses relative to the start of a path.
//! - **Mirroring**: the per-run policy that reflects authored routines for
//!   the right starting tile.
//!
//! # Example
//!
//! ```ignore
//! use changeup::motion::{MirrorPolicy, Waypoint};
//! use changeup::selection::StartSide;
//!
//! let policy = MirrorPolicy::for_side(StartSide::Right);
//! let target = policy.apply(Waypoint::new(24.0, 12.0, 45.0));
//! assert_eq!(target.y, -12.0);
//! ```

/// Start-side mirroring.
///
/// Provides [`MirrorPolicy`](mirror::MirrorPolicy), captured once per
/// autonomous run.
pub mod mirror;

/// Waypoint geometry.
///
/// Provides the [`Waypoint`](waypoint::Waypoint) pose type consumed by
/// trajectory followers.
pub mod waypoint;

pub use mirror::MirrorPolicy;
pub use waypoint::Waypoint;
