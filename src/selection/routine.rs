//! Named autonomous routines and the registry that cycles through them.
//!
//! The registry never does arithmetic on enum discriminants. The cyclic
//! order is the explicit list [`RoutineKind::ALL`] and [`RoutineKind::next`]
//! is a total match over it.

use std::fmt;

/// One of the pre-authored autonomous routines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutineKind {
    /// Score one ball, then a second one if allowed to keep going.
    #[default]
    Simple,
    /// Three-ball routine with a detached approach.
    Complex,
    /// Drive forward and back. Used to tune straight-line motion.
    TestDrive,
    /// Turn and turn back. Used to tune rotation.
    TestTurn,
}

impl RoutineKind {
    /// Every routine, in selection order.
    pub const ALL: [RoutineKind; 4] = [
        RoutineKind::Simple,
        RoutineKind::Complex,
        RoutineKind::TestDrive,
        RoutineKind::TestTurn,
    ];

    /// The routine after this one, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        match self {
            RoutineKind::Simple => RoutineKind::Complex,
            RoutineKind::Complex => RoutineKind::TestDrive,
            RoutineKind::TestDrive => RoutineKind::TestTurn,
            RoutineKind::TestTurn => RoutineKind::Simple,
        }
    }

    /// Name shown on the Brain screen.
    pub fn name(self) -> &'static str {
        match self {
            RoutineKind::Simple => "simple",
            RoutineKind::Complex => "complex",
            RoutineKind::TestDrive => "test drive",
            RoutineKind::TestTurn => "test turn",
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.name()) }
}

/// Cyclable selection of the routine to run in autonomous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutineRegistry {
    current: RoutineKind,
}

impl RoutineRegistry {
    /// Creates a registry with `kind` selected.
    pub fn starting_at(kind: RoutineKind) -> Self { Self { current: kind } }

    /// The selected routine.
    pub fn current(&self) -> RoutineKind { self.current }

    /// Selects the next routine and returns it.
    pub fn advance(&mut self) -> RoutineKind {
        self.current = self.current.next();
        self.current
    }

    /// Number of selectable routines.
    pub fn count(&self) -> usize { RoutineKind::ALL.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_follows_the_listed_order() {
        for pair in RoutineKind::ALL.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
        assert_eq!(RoutineKind::ALL[RoutineKind::ALL.len() - 1].next(), RoutineKind::ALL[0]);
    }

    #[test]
    fn advance_visits_every_routine_and_wraps() {
        let mut registry = RoutineRegistry::default();
        let first = registry.current();
        let mut seen = vec![first];

        for _ in 1..registry.count() {
            seen.push(registry.advance());
        }
        assert_eq!(seen, RoutineKind::ALL.to_vec());

        assert_eq!(registry.advance(), first);
    }

    #[test]
    fn wraps_from_any_start() {
        for start in RoutineKind::ALL {
            let mut registry = RoutineRegistry::starting_at(start);
            for _ in 0..registry.count() {
                registry.advance();
            }
            assert_eq!(registry.current(), start);
        }
    }
}
