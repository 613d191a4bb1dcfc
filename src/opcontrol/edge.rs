//! Rising-edge detection for buttons and switches.

/// Turns a level signal into press events.
///
/// The previous level is kept here, not by the input layer, so every edge is
/// computed from two consecutive control ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Records `level` and returns `true` on a transition to pressed.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.previous;
        self.previous = level;
        rising
    }

    /// The level recorded by the last update.
    pub fn level(&self) -> bool { self.previous }
}
