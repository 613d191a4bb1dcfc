//! Latched intake control.
//!
//! The intake is a three-state machine. Each control tick at most one trigger
//! is honored, in priority order:
//!
//! 1. **Ball detected** (sensor edge): stops the intake if it is running
//!    forward, so a captured ball is not jammed. The tick is consumed even
//!    when the intake is not running forward.
//! 2. **Forward button** (edge): toggles between forward and stopped. From
//!    reverse it switches straight to forward.
//! 3. **Reverse button** (edge): toggles between reverse and stopped. From
//!    forward it switches straight to reverse.
//!
//! The state is latched: with no edges the previous command is repeated.

use log::debug;

/// Signed intake output in volts.
///
/// Zero stops the intake, positive pulls balls in, negative ejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntakeCommand(f64);

impl IntakeCommand {
    /// Intake stopped.
    pub const STOP: IntakeCommand = IntakeCommand(0.0);

    /// Runs the intake at `volts`.
    pub const fn volts(volts: f64) -> Self { IntakeCommand(volts) }

    /// The output in volts.
    pub fn voltage(&self) -> f64 { self.0 }

    /// The state this output corresponds to.
    pub fn state(&self) -> IntakeState {
        if self.0 > 0.0 {
            IntakeState::Forward
        } else if self.0 < 0.0 {
            IntakeState::Reverse
        } else {
            IntakeState::Stopped
        }
    }
}

/// Direction the intake is latched in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntakeState {
    #[default]
    Stopped,
    Forward,
    Reverse,
}

impl IntakeState {
    /// Output for this state with a magnitude of `max_voltage`.
    pub fn command(self, max_voltage: f64) -> IntakeCommand {
        match self {
            IntakeState::Stopped => IntakeCommand::STOP,
            IntakeState::Forward => IntakeCommand::volts(max_voltage),
            IntakeState::Reverse => IntakeCommand::volts(-max_voltage),
        }
    }
}

/// Rising edges seen in one control tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeEdges {
    /// The ball sensor turned on.
    pub sensor:  bool,
    /// The forward button was pressed.
    pub forward: bool,
    /// The reverse button was pressed.
    pub reverse: bool,
}

/// The intake state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeArbiter {
    state:       IntakeState,
    max_voltage: f64,
}

impl IntakeArbiter {
    /// Creates a stopped arbiter driving the intake at `max_voltage`.
    pub fn new(max_voltage: f64) -> Self {
        Self {
            state: IntakeState::Stopped,
            max_voltage,
        }
    }

    /// The latched state.
    pub fn state(&self) -> IntakeState { self.state }

    /// The output for the latched state.
    pub fn command(&self) -> IntakeCommand { self.state.command(self.max_voltage) }

    /// Applies one tick of edges and returns the output to send.
    pub fn update(&mut self, edges: IntakeEdges) -> IntakeCommand {
        let next = next_state(self.state, edges);
        if next != self.state {
            debug!("Intake {:?} -> {:?}", self.state, next);
            self.state = next;
        }
        self.command()
    }
}

fn next_state(state: IntakeState, edges: IntakeEdges) -> IntakeState {
    use IntakeState::*;

    if edges.sensor {
        if state == Forward { Stopped } else { state }
    } else if edges.forward {
        if state == Forward { Stopped } else { Forward }
    } else if edges.reverse {
        if state == Reverse { Stopped } else { Reverse }
    } else {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: IntakeEdges = IntakeEdges {
        sensor:  false,
        forward: true,
        reverse: false,
    };
    const REVERSE: IntakeEdges = IntakeEdges {
        sensor:  false,
        forward: false,
        reverse: true,
    };
    const SENSOR: IntakeEdges = IntakeEdges {
        sensor:  true,
        forward: false,
        reverse: false,
    };
    const NONE: IntakeEdges = IntakeEdges {
        sensor:  false,
        forward: false,
        reverse: false,
    };

    #[test]
    fn forward_button_toggles() {
        let mut arbiter = IntakeArbiter::new(12.0);
        assert_eq!(arbiter.update(FORWARD), IntakeCommand::volts(12.0));
        assert_eq!(arbiter.state(), IntakeState::Forward);
        assert_eq!(arbiter.update(FORWARD), IntakeCommand::STOP);
        assert_eq!(arbiter.state(), IntakeState::Stopped);
    }

    #[test]
    fn reverse_button_toggles() {
        let mut arbiter = IntakeArbiter::new(12.0);
        assert_eq!(arbiter.update(REVERSE), IntakeCommand::volts(-12.0));
        assert_eq!(arbiter.update(REVERSE), IntakeCommand::STOP);
    }

    #[test]
    fn buttons_switch_direction_directly() {
        let mut arbiter = IntakeArbiter::new(12.0);
        arbiter.update(REVERSE);
        assert_eq!(arbiter.update(FORWARD).state(), IntakeState::Forward);
        assert_eq!(arbiter.update(REVERSE).state(), IntakeState::Reverse);
    }

    #[test]
    fn state_is_latched_without_edges() {
        let mut arbiter = IntakeArbiter::new(12.0);
        arbiter.update(FORWARD);
        for _ in 0..5 {
            assert_eq!(arbiter.update(NONE), IntakeCommand::volts(12.0));
        }
    }

    #[test]
    fn sensor_stops_forward_and_beats_buttons() {
        let mut arbiter = IntakeArbiter::new(12.0);
        arbiter.update(FORWARD);

        let everything = IntakeEdges {
            sensor:  true,
            forward: true,
            reverse: true,
        };
        assert_eq!(arbiter.update(everything), IntakeCommand::STOP);
        assert_eq!(arbiter.state(), IntakeState::Stopped);
    }

    #[test]
    fn sensor_consumes_the_tick_when_not_forward() {
        let mut arbiter = IntakeArbiter::new(12.0);
        arbiter.update(REVERSE);
        assert_eq!(arbiter.update(SENSOR).state(), IntakeState::Reverse);

        let sensor_and_forward = IntakeEdges {
            forward: true,
            ..SENSOR
        };
        assert_eq!(arbiter.update(sensor_and_forward).state(), IntakeState::Reverse);

        let mut stopped = IntakeArbiter::new(12.0);
        assert_eq!(stopped.update(sensor_and_forward), IntakeCommand::STOP);
    }

    #[test]
    fn forward_beats_reverse() {
        let mut arbiter = IntakeArbiter::new(9.0);
        let both = IntakeEdges {
            forward: true,
            reverse: true,
            ..NONE
        };
        assert_eq!(arbiter.update(both), IntakeCommand::volts(9.0));
    }

    #[test]
    fn command_zones() {
        assert_eq!(IntakeCommand::volts(3.0).state(), IntakeState::Forward);
        assert_eq!(IntakeCommand::volts(-3.0).state(), IntakeState::Reverse);
        assert_eq!(IntakeCommand::STOP.state(), IntakeState::Stopped);
    }
}
