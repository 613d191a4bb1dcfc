//! Starting tile selection.

use std::fmt;

/// The tile the robot starts the match on.
///
/// Routines are authored for [`StartSide::Left`]; the right side runs the
/// same routine mirrored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartSide {
    #[default]
    Left,
    Right,
}

impl StartSide {
    /// The other side.
    pub fn toggled(self) -> Self {
        match self {
            StartSide::Left => StartSide::Right,
            StartSide::Right => StartSide::Left,
        }
    }

    /// Upper-case label used on the Brain screen.
    pub fn label(self) -> &'static str {
        match self {
            StartSide::Left => "LEFT",
            StartSide::Right => "RIGHT",
        }
    }
}

impl fmt::Display for StartSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.label()) }
}
