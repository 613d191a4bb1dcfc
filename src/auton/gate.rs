//! Bounded wait for the ball sensor.
//!
//! The gate polls the sensor until it reads active or the timeout elapses.
//! It never returns later than the timeout plus one poll interval. A broken
//! sensor and a ball that never arrives look the same: both end in
//! [`DetectionOutcome::TimedOut`].
//!
//! After a detection the gate pauses for the configured settle time so the
//! ball is seated before the next step moves the robot. The settle time is
//! never applied after a timeout.

use std::time::Duration;

use log::{debug, warn};

use crate::{
    config::GateConfig,
    peripherals::{Clock, DetectionSensor},
};

/// How a gate wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// The sensor read active.
    Detected,
    /// The timeout elapsed first.
    TimedOut,
}

/// Polls a [`DetectionSensor`] with a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorGate {
    poll_interval: Duration,
    settle:        Duration,
}

impl SensorGate {
    /// Creates a gate with explicit timing.
    pub fn new(poll_interval: Duration, settle: Duration) -> Self {
        Self {
            poll_interval,
            settle,
        }
    }

    /// Creates a gate from the robot configuration.
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.poll_interval, config.settle)
    }

    /// Time between two sensor reads.
    pub fn poll_interval(&self) -> Duration { self.poll_interval }

    /// Waits until `sensor` reads active or `timeout` elapses.
    pub async fn wait_for_detection<S: DetectionSensor, C: Clock>(
        &self,
        sensor: &mut S,
        clock: &C,
        timeout: Duration,
    ) -> DetectionOutcome {
        let start = clock.now();
        loop {
            if sensor.is_active() {
                debug!("Ball detected after {:?}", clock.now().saturating_sub(start));
                if !self.settle.is_zero() {
                    clock.sleep(self.settle).await;
                }
                return DetectionOutcome::Detected;
            }
            if clock.now().saturating_sub(start) >= timeout {
                warn!("No ball detected within {:?}", timeout);
                return DetectionOutcome::TimedOut;
            }
            clock.sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::peripherals::sim::{SimClock, SimSensor};

    const POLL: Duration = Duration::from_millis(10);

    #[test]
    fn times_out_within_one_poll_interval() {
        let clock = SimClock::default();
        let mut sensor = SimSensor::never(clock.clone());
        let gate = SensorGate::new(POLL, Duration::ZERO);

        let outcome = block_on(gate.wait_for_detection(
            &mut sensor,
            &clock,
            Duration::from_millis(1000),
        ));

        assert_eq!(outcome, DetectionOutcome::TimedOut);
        assert!(clock.now() >= Duration::from_millis(1000));
        assert!(clock.now() <= Duration::from_millis(1000) + gate.poll_interval());
    }

    #[test]
    fn configured_interval_bounds_the_overshoot() {
        let clock = SimClock::default();
        let mut sensor = SimSensor::never(clock.clone());
        let gate = SensorGate::from_config(&GateConfig {
            poll_interval: Duration::from_millis(25),
            settle:        Duration::ZERO,
        });
        assert_eq!(gate.poll_interval(), Duration::from_millis(25));

        let outcome = block_on(gate.wait_for_detection(
            &mut sensor,
            &clock,
            Duration::from_millis(110),
        ));

        assert_eq!(outcome, DetectionOutcome::TimedOut);
        assert!(clock.now() >= Duration::from_millis(110));
        assert!(clock.now() <= Duration::from_millis(110) + gate.poll_interval());
    }

    #[test]
    fn detects_a_ball_arriving_mid_wait() {
        let clock = SimClock::default();
        let mut sensor = SimSensor::active_from(clock.clone(), Duration::from_millis(200));
        let gate = SensorGate::new(POLL, Duration::ZERO);

        let outcome = block_on(gate.wait_for_detection(
            &mut sensor,
            &clock,
            Duration::from_millis(1000),
        ));

        assert_eq!(outcome, DetectionOutcome::Detected);
        assert!(clock.now() >= Duration::from_millis(200));
        assert!(clock.now() <= Duration::from_millis(200) + POLL);
    }

    #[test]
    fn already_active_returns_immediately() {
        let clock = SimClock::default();
        let mut sensor = SimSensor::active_from(clock.clone(), Duration::ZERO);
        let gate = SensorGate::new(POLL, Duration::ZERO);

        let outcome = block_on(gate.wait_for_detection(&mut sensor, &clock, Duration::ZERO));
        assert_eq!(outcome, DetectionOutcome::Detected);
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn settle_follows_detection_only() {
        let settle = Duration::from_millis(250);
        let gate = SensorGate::new(POLL, settle);

        let clock = SimClock::default();
        let mut sensor = SimSensor::active_from(clock.clone(), Duration::from_millis(200));
        let outcome = block_on(gate.wait_for_detection(
            &mut sensor,
            &clock,
            Duration::from_millis(1000),
        ));
        assert_eq!(outcome, DetectionOutcome::Detected);
        assert_eq!(clock.now(), Duration::from_millis(200) + settle);

        let clock = SimClock::default();
        let mut sensor = SimSensor::never(clock.clone());
        let outcome = block_on(gate.wait_for_detection(
            &mut sensor,
            &clock,
            Duration::from_millis(300),
        ));
        assert_eq!(outcome, DetectionOutcome::TimedOut);
        assert!(clock.now() <= Duration::from_millis(300) + POLL);
    }
}
