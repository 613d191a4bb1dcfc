//! Simulated collaborators.
//!
//! Time is simulated: [`SimClock::sleep`] advances the clock and returns
//! immediately, so every future in the controller completes on its first
//! poll and timing properties can be checked exactly. Motion and actuation
//! calls are recorded, in order, in a shared [`CallLog`].

use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    rc::Rc,
    time::Duration,
};

use super::{
    Clock, ControllerSnapshot, DetectionSensor, Devices, Drivetrain, FollowMode, HintDisplay,
    IntakeActuator, OperatorInput, Platform, TrajectoryRunner,
};
use crate::{motion::Waypoint, opcontrol::IntakeCommand};

/// A recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Arcade {
        forward: f64,
        turn:    f64,
    },
    Turn {
        degrees:        f64,
        velocity_limit: Option<f64>,
        mirrored:       bool,
    },
    Move {
        inches: f64,
    },
    SetMirrored(bool),
    VelocityLimit(Option<f64>),
    Follow {
        points:   usize,
        mode:     FollowMode,
        reversed: bool,
        mirrored: bool,
    },
    Settle,
    Intake(f64),
}

/// Ordered record of calls shared by the simulated devices.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl CallLog {
    pub fn record(&self, call: Call) { self.calls.borrow_mut().push(call); }

    pub fn calls(&self) -> Vec<Call> { self.calls.borrow().clone() }
}

/// Simulated time.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<RefCell<Duration>>,
}

impl SimClock {
    pub fn advance(&self, duration: Duration) { *self.now.borrow_mut() += duration; }
}

impl Clock for SimClock {
    fn now(&self) -> Duration { *self.now.borrow() }

    async fn sleep(&self, duration: Duration) { self.advance(duration); }
}

/// Ball sensor that turns on at a fixed simulated time.
#[derive(Debug, Clone)]
pub struct SimSensor {
    clock:  SimClock,
    window: Option<(Duration, Duration)>,
}

impl SimSensor {
    pub fn never(clock: SimClock) -> Self {
        Self {
            clock,
            window: None,
        }
    }

    pub fn active_from(clock: SimClock, from: Duration) -> Self {
        Self {
            clock,
            window: Some((from, Duration::MAX)),
        }
    }

    pub fn active_between(clock: SimClock, from: Duration, until: Duration) -> Self {
        Self {
            clock,
            window: Some((from, until)),
        }
    }
}

impl DetectionSensor for SimSensor {
    fn is_active(&mut self) -> bool {
        let now = self.clock.now();
        self.window
            .is_some_and(|(from, until)| now >= from && now < until)
    }
}

/// Drivetrain that records its commands.
#[derive(Debug)]
pub struct SimDrive {
    log:      CallLog,
    mirrored: bool,
}

impl SimDrive {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            mirrored: false,
        }
    }
}

impl Drivetrain for SimDrive {
    fn arcade(&mut self, forward: f64, turn: f64) {
        self.log.record(Call::Arcade { forward, turn });
    }

    async fn turn(&mut self, degrees: f64, velocity_limit: Option<f64>) {
        self.log.record(Call::Turn {
            degrees,
            velocity_limit,
            mirrored: self.mirrored,
        });
    }

    async fn move_straight(&mut self, inches: f64) { self.log.record(Call::Move { inches }); }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
        self.log.record(Call::SetMirrored(mirrored));
    }

    fn set_velocity_limit(&mut self, limit: f64) {
        self.log.record(Call::VelocityLimit(Some(limit)));
    }

    fn reset_velocity_limit(&mut self) { self.log.record(Call::VelocityLimit(None)); }
}

/// Trajectory follower that records its commands.
pub struct SimTrajectory {
    log:       CallLog,
    on_follow: Option<Box<dyn FnMut()>>,
}

impl SimTrajectory {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            on_follow: None,
        }
    }

    /// Runs `hook` every time a path is followed, standing in for events that
    /// arrive while the robot is moving.
    pub fn on_follow(&mut self, hook: impl FnMut() + 'static) {
        self.on_follow = Some(Box::new(hook));
    }
}

impl TrajectoryRunner for SimTrajectory {
    async fn follow(
        &mut self,
        path: &[Waypoint],
        mode: FollowMode,
        reversed: bool,
        mirrored: bool,
    ) {
        self.log.record(Call::Follow {
            points: path.len(),
            mode,
            reversed,
            mirrored,
        });
        if let Some(hook) = self.on_follow.as_mut() {
            hook();
        }
    }

    async fn wait_until_settled(&mut self) { self.log.record(Call::Settle); }
}

/// Intake that records its commands.
#[derive(Debug)]
pub struct SimIntake {
    log:   CallLog,
    level: IntakeCommand,
}

impl SimIntake {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            level: IntakeCommand::STOP,
        }
    }

    pub fn level(&self) -> IntakeCommand { self.level }
}

impl IntakeActuator for SimIntake {
    fn set_level(&mut self, command: IntakeCommand) {
        self.level = command;
        self.log.record(Call::Intake(command.voltage()));
    }
}

/// Controller replaying queued snapshots, idle once the queue is empty.
#[derive(Debug, Default)]
pub struct SimInput {
    queue: VecDeque<ControllerSnapshot>,
}

impl SimInput {
    pub fn push(&mut self, snapshot: ControllerSnapshot) { self.queue.push_back(snapshot); }
}

impl OperatorInput for SimInput {
    fn snapshot(&mut self) -> ControllerSnapshot { self.queue.pop_front().unwrap_or_default() }
}

/// Hint display keeping the last text of every line.
#[derive(Debug, Clone, Default)]
pub struct SimHints {
    lines: Rc<RefCell<BTreeMap<u8, String>>>,
}

impl SimHints {
    pub fn line(&self, line: u8) -> Option<String> { self.lines.borrow().get(&line).cloned() }
}

impl HintDisplay for SimHints {
    fn set_line(&mut self, line: u8, text: &str) {
        self.lines.borrow_mut().insert(line, text.to_string());
    }
}

/// The simulated platform.
pub struct SimPlatform;

impl Platform for SimPlatform {
    type Clock = SimClock;
    type Drive = SimDrive;
    type Input = SimInput;
    type Intake = SimIntake;
    type Sensor = SimSensor;
    type Trajectory = SimTrajectory;
}

/// Simulated devices sharing one clock and one call log. The ball sensor
/// turns on at `ball_at`, or never.
pub fn sim_devices(ball_at: Option<Duration>) -> (Devices<SimPlatform>, CallLog) {
    let log = CallLog::default();
    let clock = SimClock::default();
    let sensor = match ball_at {
        Some(at) => SimSensor::active_from(clock.clone(), at),
        None => SimSensor::never(clock.clone()),
    };
    let devices = Devices {
        drive: SimDrive::new(log.clone()),
        trajectory: SimTrajectory::new(log.clone()),
        intake: SimIntake::new(log.clone()),
        sensor,
        input: SimInput::default(),
        clock,
    };
    (devices, log)
}
