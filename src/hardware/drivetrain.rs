//! Differential drivetrain.
//!
//! Left and right motor groups driven with arcade mixing during driver
//! control, and with an encoder feedback loop for autonomous moves and
//! turns.
//!
//! # Example
//!
//! ```ignore
//! use changeup::hardware::drivetrain::{Differential, DriveGeometry};
//! use vexide::prelude::*;
//!
//! let drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     ],
//!     DriveGeometry::default(),
//! );
//! ```

use std::{cell::RefCell, f64::consts::PI, rc::Rc, time::Duration};

use log::{debug, warn};
use vexide::{prelude::Motor, smart::motor::BrakeMode, time::sleep};

use crate::{config::MAX_MOTOR_VOLTAGE, motion::MirrorPolicy, peripherals::Drivetrain};

/// Period of the position loop.
const LOOPRATE: Duration = Duration::from_millis(5);

/// Physical dimensions of the drivetrain, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveGeometry {
    /// Wheel diameter.
    pub wheel_diameter: f64,
    /// Teeth of the gear on the motor.
    pub driving_gear:   f64,
    /// Teeth of the gear on the wheel.
    pub driven_gear:    f64,
    /// Distance between the left and right wheels.
    pub track_width:    f64,
}

impl Default for DriveGeometry {
    fn default() -> Self {
        Self {
            wheel_diameter: 4.0,
            driving_gear:   1.0,
            driven_gear:    1.0,
            track_width:    12.5,
        }
    }
}

impl DriveGeometry {
    /// Motor rotation, in radians, for the wheels to roll `inches`.
    pub fn motor_radians(&self, inches: f64) -> f64 {
        inches / (self.wheel_diameter / 2.0) * (self.driven_gear / self.driving_gear)
    }

    /// Motor rotation, in radians, of each side for an in-place turn of
    /// `degrees`. The left side turns forward for positive angles.
    pub fn turn_radians(&self, degrees: f64) -> f64 {
        self.motor_radians(PI * self.track_width * degrees / 360.0)
    }
}

/// Gains of the position loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionGains {
    /// Volts per radian of error.
    pub kp:        f64,
    /// Volts per radian per second of error change.
    pub kd:        f64,
    /// Error, in motor radians, considered on target.
    pub tolerance: f64,
    /// Longest time a single motion may take.
    pub timeout:   Duration,
}

impl Default for MotionGains {
    fn default() -> Self {
        Self {
            kp:        2.0,
            kd:        0.05,
            tolerance: 0.05,
            timeout:   Duration::from_millis(3000),
        }
    }
}

/// A differential drivetrain.
///
/// The motors are stored in reference-counted cells, so a clone drives the
/// same motors. The trajectory runner holds one.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    pub left:       Rc<RefCell<dyn AsMut<[Motor]>>>,
    /// The right motor group.
    pub right:      Rc<RefCell<dyn AsMut<[Motor]>>>,
    geometry:       DriveGeometry,
    gains:          MotionGains,
    mirror:         MirrorPolicy,
    velocity_limit: f64,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
        geometry: DriveGeometry,
    ) -> Self {
        Self {
            left: Rc::new(RefCell::new(left)),
            right: Rc::new(RefCell::new(right)),
            geometry,
            gains: MotionGains::default(),
            mirror: MirrorPolicy::from_active(false),
            velocity_limit: 1.0,
        }
    }

    /// Replaces the position loop gains.
    pub fn with_gains(mut self, gains: MotionGains) -> Self {
        self.gains = gains;
        self
    }

    /// Sets the brake mode for all motors in the drivetrain.
    pub fn set_brakemode(&self, brakemode: BrakeMode) {
        for side in [&self.left, &self.right] {
            if let Ok(mut motors) = side.try_borrow_mut() {
                for motor in motors.as_mut() {
                    let _ = motor.brake(brakemode);
                }
            }
        }
    }

    /// Drives `inches` along the current heading, output capped at
    /// `limit` of full power.
    pub async fn travel(&self, inches: f64, limit: f64) {
        let target = self.geometry.motor_radians(inches);
        self.run_to(target, target, limit).await;
    }

    /// Turns in place by `degrees`, clockwise positive, output capped at
    /// `limit` of full power. Not mirrored.
    pub async fn rotate(&self, degrees: f64, limit: f64) {
        let target = self.geometry.turn_radians(degrees);
        self.run_to(target, -target, limit).await;
    }

    fn set_voltages(&self, left_voltage: f64, right_voltage: f64) {
        if let Ok(mut left_motors) = self.left.try_borrow_mut() {
            for motor in left_motors.as_mut() {
                let _ = motor.set_voltage(left_voltage);
            }
        }

        if let Ok(mut right_motors) = self.right.try_borrow_mut() {
            for motor in right_motors.as_mut() {
                let _ = motor.set_voltage(right_voltage);
            }
        }
    }

    /// Moves each side by the given motor rotation from where it is now.
    async fn run_to(&self, delta_left: f64, delta_right: f64, limit: f64) {
        let max_voltage = MAX_MOTOR_VOLTAGE * limit.clamp(0.0, 1.0);
        let target_left = side_position(&self.left) + delta_left;
        let target_right = side_position(&self.right) + delta_right;
        let dt = LOOPRATE.as_secs_f64();

        let mut perror_left = delta_left;
        let mut perror_right = delta_right;
        let mut elapsed = Duration::ZERO;

        loop {
            let error_left = target_left - side_position(&self.left);
            let error_right = target_right - side_position(&self.right);

            if error_left.abs() < self.gains.tolerance && error_right.abs() < self.gains.tolerance {
                debug!("Motion settled in {:?}", elapsed);
                break;
            }
            if elapsed >= self.gains.timeout {
                warn!(
                    "Motion timed out with {:.3}/{:.3} rad left",
                    error_left, error_right
                );
                break;
            }

            let u_left =
                self.gains.kp * error_left + self.gains.kd * (error_left - perror_left) / dt;
            let u_right =
                self.gains.kp * error_right + self.gains.kd * (error_right - perror_right) / dt;
            self.set_voltages(abscap(u_left, max_voltage), abscap(u_right, max_voltage));

            perror_left = error_left;
            perror_right = error_right;
            sleep(LOOPRATE).await;
            elapsed += LOOPRATE;
        }

        self.set_voltages(0.0, 0.0);
    }
}

impl Drivetrain for Differential {
    /// Mixes the inputs as `left = (forward + turn) * 12` and
    /// `right = (forward - turn) * 12`.
    fn arcade(&mut self, forward: f64, turn: f64) {
        let left_voltage = (forward + turn) * MAX_MOTOR_VOLTAGE;
        let right_voltage = (forward - turn) * MAX_MOTOR_VOLTAGE;
        self.set_voltages(left_voltage, right_voltage);
    }

    async fn turn(&mut self, degrees: f64, velocity_limit: Option<f64>) {
        let limit = velocity_limit.map_or(self.velocity_limit, |v| v.min(self.velocity_limit));
        self.rotate(degrees * self.mirror.sign(), limit).await;
    }

    async fn move_straight(&mut self, inches: f64) {
        self.travel(inches, self.velocity_limit).await;
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.mirror = MirrorPolicy::from_active(mirrored);
    }

    fn set_velocity_limit(&mut self, limit: f64) { self.velocity_limit = limit.clamp(0.0, 1.0); }

    fn reset_velocity_limit(&mut self) { self.velocity_limit = 1.0; }
}

/// Average encoder position of a motor group, in radians.
fn side_position(side: &Rc<RefCell<dyn AsMut<[Motor]>>>) -> f64 {
    let Ok(mut motors) = side.try_borrow_mut() else {
        warn!("Error Borrowing Motor Group");
        return 0.0;
    };
    let motors = motors.as_mut();
    if motors.is_empty() {
        return 0.0;
    }
    let sum: f64 = motors
        .iter()
        .map(|motor| {
            motor
                .position()
                .unwrap_or_else(|e| {
                    warn!("Error Getting Motor Encoder Position: {}", e);
                    Default::default()
                })
                .as_radians()
        })
        .sum();
    sum / motors.len() as f64
}

fn abscap(value: f64, cap: f64) -> f64 { value.clamp(-cap, cap) }
