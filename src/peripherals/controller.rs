//! Controller state as seen by the control loops.
//!
//! A [`ControllerSnapshot`] is a plain copy of the stick positions and button
//! levels at one instant. Edges are not part of the snapshot; the manual loop
//! derives them from consecutive snapshots.
//!
//! # Example
//!
//! ```ignore
//! use changeup::peripherals::{ControllerButton, ControllerSnapshot};
//!
//! let snapshot = ControllerSnapshot::default()
//!     .with_sticks(0.5, -0.25)
//!     .with_pressed(ControllerButton::ButtonL1);
//!
//! assert!(snapshot.is_pressed(ControllerButton::ButtonL1));
//! ```

/// A list of Controller Buttons.
///
/// # Example
///
/// ```ignore
/// let intake_forward = ControllerButton::ButtonL1;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

impl ControllerButton {
    /// Every button, in snapshot order.
    pub const ALL: [ControllerButton; 12] = [
        ControllerButton::ButtonA,
        ControllerButton::ButtonB,
        ControllerButton::ButtonX,
        ControllerButton::ButtonY,
        ControllerButton::ButtonUp,
        ControllerButton::ButtonDown,
        ControllerButton::ButtonLeft,
        ControllerButton::ButtonRight,
        ControllerButton::ButtonL1,
        ControllerButton::ButtonL2,
        ControllerButton::ButtonR1,
        ControllerButton::ButtonR2,
    ];

    fn slot(self) -> usize { self as usize }
}

/// Stick positions and button levels read in one control tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerSnapshot {
    /// Left stick vertical axis, `[-1.0, 1.0]`. Drives forward/backward.
    pub left_y:  f64,
    /// Right stick horizontal axis, `[-1.0, 1.0]`. Drives turning.
    pub right_x: f64,
    buttons:     [bool; 12],
}

impl ControllerSnapshot {
    /// Returns whether `button` is held down.
    pub fn is_pressed(&self, button: ControllerButton) -> bool { self.buttons[button.slot()] }

    /// Records the level of `button`.
    pub fn set_pressed(&mut self, button: ControllerButton, pressed: bool) {
        self.buttons[button.slot()] = pressed;
    }

    /// Returns a copy with `button` held down.
    pub fn with_pressed(mut self, button: ControllerButton) -> Self {
        self.set_pressed(button, true);
        self
    }

    /// Returns a copy with the given stick positions.
    pub fn with_sticks(mut self, left_y: f64, right_x: f64) -> Self {
        self.left_y = left_y;
        self.right_x = right_x;
        self
    }

    /// Returns whether every button in `buttons` is held down.
    pub fn all_pressed(&self, buttons: &[ControllerButton]) -> bool {
        !buttons.is_empty() && buttons.iter().all(|b| self.is_pressed(*b))
    }
}
