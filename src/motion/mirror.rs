//! Left/right mirroring of authored routines.
//!
//! Routines are authored once, for the left starting tile. A [`MirrorPolicy`]
//! taken at the start of a run reflects every lateral quantity for the right
//! tile. The policy is `Copy` and is never re-read during a run, so toggling
//! the start side while a routine is executing has no effect on that run.

use crate::{motion::Waypoint, selection::StartSide};

/// Snapshot of the start side for one autonomous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorPolicy {
    mirrored: bool,
}

impl MirrorPolicy {
    /// Policy for a robot starting on `side`.
    pub fn for_side(side: StartSide) -> Self {
        Self {
            mirrored: side == StartSide::Right,
        }
    }

    /// Policy from an already resolved mirror flag.
    pub fn from_active(mirrored: bool) -> Self { Self { mirrored } }

    /// Whether turns and lateral offsets are reflected.
    pub fn active(&self) -> bool { self.mirrored }

    /// `1.0` when authored values are used as-is, `-1.0` when reflected.
    pub fn sign(&self) -> f64 { if self.mirrored { -1.0 } else { 1.0 } }

    /// Applies the policy to a waypoint.
    pub fn apply(&self, waypoint: Waypoint) -> Waypoint {
        if self.mirrored {
            waypoint.mirrored()
        } else {
            waypoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_side_is_mirrored() {
        let left = MirrorPolicy::for_side(StartSide::Left);
        let right = MirrorPolicy::for_side(StartSide::Right);

        assert!(!left.active());
        assert_eq!(left.sign(), 1.0);
        assert!(right.active());
        assert_eq!(right.sign(), -1.0);
    }

    #[test]
    fn from_active_matches_side() {
        assert_eq!(
            MirrorPolicy::from_active(true),
            MirrorPolicy::for_side(StartSide::Right)
        );
        assert_eq!(
            MirrorPolicy::from_active(false),
            MirrorPolicy::for_side(StartSide::Left)
        );
    }

    #[test]
    fn apply_only_reflects_when_active() {
        let wp = Waypoint::new(10.0, 5.0, 30.0);
        assert_eq!(MirrorPolicy::for_side(StartSide::Left).apply(wp), wp);
        assert_eq!(
            MirrorPolicy::for_side(StartSide::Right).apply(wp),
            Waypoint::new(10.0, -5.0, -30.0)
        );
    }
}
