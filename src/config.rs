//! Robot configuration.
//!
//! All tunables of the controller live in [`RobotConfig`]. The Brain has no
//! configuration files, so the values are set in code, usually by starting
//! from [`RobotConfig::default`] and overriding fields, and checked once at
//! startup with [`RobotConfig::validate`].
//!
//! # Example
//!
//! ```ignore
//! use changeup::config::RobotConfig;
//! use std::time::Duration;
//!
//! let mut config = RobotConfig::default();
//! config.gate.settle = Duration::from_millis(150);
//! config.validate()?;
//! ```

use std::{error::Error, fmt, time::Duration};

use log::LevelFilter;

use crate::peripherals::ControllerButton;

/// Highest voltage a V5 motor accepts.
pub const MAX_MOTOR_VOLTAGE: f64 = 12.0;

/// Buttons used during driver control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    /// Toggles the intake forward.
    pub intake_forward: ControllerButton,
    /// Toggles the intake in reverse.
    pub intake_reverse: ControllerButton,
    /// Held together, these run the selected autonomous routine.
    pub combo:          [ControllerButton; 2],
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            intake_forward: ControllerButton::ButtonL1,
            intake_reverse: ControllerButton::ButtonL2,
            combo:          [ControllerButton::ButtonLeft, ControllerButton::ButtonA],
        }
    }
}

/// Timing of the ball sensor gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Time between two reads of the sensor.
    pub poll_interval: Duration,
    /// Pause after a ball is detected, before the next step runs. Never
    /// applied after a timeout.
    pub settle:        Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            settle:        Duration::from_millis(250),
        }
    }
}

/// Every tunable of the competition controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotConfig {
    /// Magnitude of the intake output in volts.
    pub intake_voltage:   f64,
    /// Period of the driver control loop.
    pub tick_interval:    Duration,
    /// Sensor gate timing.
    pub gate:             GateConfig,
    /// Driver control buttons.
    pub buttons:          ButtonMap,
    /// Whether the competition autonomous period runs routines past their
    /// first scored ball.
    pub auton_keep_going: bool,
    /// Whether a routine started with the driver combo runs past its first
    /// scored ball.
    pub combo_keep_going: bool,
    /// Minimum level written to the log.
    pub log_level:        LevelFilter,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            intake_voltage:   MAX_MOTOR_VOLTAGE,
            tick_interval:    Duration::from_millis(10),
            gate:             GateConfig::default(),
            buttons:          ButtonMap::default(),
            auton_keep_going: true,
            combo_keep_going: false,
            log_level:        LevelFilter::Info,
        }
    }
}

impl RobotConfig {
    /// Checks the configuration for values the controller cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.gate.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if !(self.intake_voltage > 0.0 && self.intake_voltage <= MAX_MOTOR_VOLTAGE) {
            return Err(ConfigError::IntakeVoltage(self.intake_voltage));
        }
        let [first, second] = self.buttons.combo;
        if first == second {
            return Err(ConfigError::DuplicateComboButton(first));
        }
        if self.buttons.intake_forward == self.buttons.intake_reverse {
            return Err(ConfigError::IntakeButtonsShared(self.buttons.intake_forward));
        }
        for button in self.buttons.combo {
            if button == self.buttons.intake_forward || button == self.buttons.intake_reverse {
                return Err(ConfigError::ComboOverlapsIntake(button));
            }
        }
        Ok(())
    }
}

/// A configuration value the controller cannot run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The driver loop period is zero.
    ZeroTickInterval,
    /// The sensor gate poll interval is zero.
    ZeroPollInterval,
    /// The intake voltage is not in `(0, 12]`.
    IntakeVoltage(f64),
    /// Both combo buttons are the same button.
    DuplicateComboButton(ControllerButton),
    /// Forward and reverse intake share a button.
    IntakeButtonsShared(ControllerButton),
    /// A combo button also toggles the intake.
    ComboOverlapsIntake(ControllerButton),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTickInterval => write!(f, "driver tick interval must be non-zero"),
            ConfigError::ZeroPollInterval => write!(f, "sensor poll interval must be non-zero"),
            ConfigError::IntakeVoltage(v) => {
                write!(f, "intake voltage {} is outside (0, {}]", v, MAX_MOTOR_VOLTAGE)
            }
            ConfigError::DuplicateComboButton(b) => {
                write!(f, "combo uses {:?} twice", b)
            }
            ConfigError::IntakeButtonsShared(b) => {
                write!(f, "{:?} toggles both intake directions", b)
            }
            ConfigError::ComboOverlapsIntake(b) => {
                write!(f, "{:?} is both a combo button and an intake button", b)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RobotConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_intervals() {
        let mut config = RobotConfig::default();
        config.tick_interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));

        let mut config = RobotConfig::default();
        config.gate.poll_interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));
    }

    #[test]
    fn rejects_out_of_range_voltage() {
        for volts in [0.0, -3.0, 12.5, f64::NAN] {
            let mut config = RobotConfig::default();
            config.intake_voltage = volts;
            assert!(matches!(config.validate(), Err(ConfigError::IntakeVoltage(_))));
        }
    }

    #[test]
    fn rejects_conflicting_buttons() {
        let mut config = RobotConfig::default();
        config.buttons.combo = [ControllerButton::ButtonA, ControllerButton::ButtonA];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateComboButton(ControllerButton::ButtonA))
        );

        let mut config = RobotConfig::default();
        config.buttons.combo = [ControllerButton::ButtonL1, ControllerButton::ButtonA];
        assert_eq!(
            config.validate(),
            Err(ConfigError::ComboOverlapsIntake(ControllerButton::ButtonL1))
        );

        let mut config = RobotConfig::default();
        config.buttons.intake_reverse = ControllerButton::ButtonL1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::IntakeButtonsShared(ControllerButton::ButtonL1))
        );
    }

    #[test]
    fn errors_describe_the_problem() {
        let text = ConfigError::IntakeVoltage(14.0).to_string();
        assert_eq!(text, "intake voltage 14 is outside (0, 12]");
    }
}
