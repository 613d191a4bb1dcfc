//! The driver's V5 controller.

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

use crate::peripherals::{ControllerButton, ControllerSnapshot, OperatorInput};

/// Reads the primary controller once per tick.
pub struct PrimaryController {
    controller: Controller,
}

impl PrimaryController {
    /// Wraps the primary controller.
    pub fn new(controller: Controller) -> Self { Self { controller } }
}

impl OperatorInput for PrimaryController {
    /// A disconnected controller reads as centered sticks and no buttons.
    fn snapshot(&mut self) -> ControllerSnapshot {
        let state = self.controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        let mut snapshot =
            ControllerSnapshot::default().with_sticks(state.left_stick.y(), state.right_stick.x());
        for button in ControllerButton::ALL {
            snapshot.set_pressed(button, button_state(&state, button).is_pressed());
        }
        snapshot
    }
}

fn button_state(state: &ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}
