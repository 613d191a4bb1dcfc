//! Competition-mode dispatch.
//!
//! [`Competition`] owns the devices and decides which of the two control
//! modes drives them. The autonomous period runs the selected routine once.
//! The driver period ticks the [`ManualLoop`] and, when a tick requests it,
//! runs the selected routine to completion before the next tick. Only one
//! mode ever drives the actuators.
//!
//! # Example
//!
//! ```ignore
//! use changeup::competition::Competition;
//!
//! let mut competition = Competition::new(devices, selection.clone(), config);
//! competition.autonomous().await;
//! competition.driver().await;
//! ```

use log::info;

use crate::{
    auton::{AutonomousProgram, RunReport},
    config::RobotConfig,
    opcontrol::{ManualLoop, TickOutcome},
    peripherals::{Clock, DetectionSensor, Devices, OperatorInput, Platform},
    selection::SelectionHandle,
};

/// Top-level controller for one robot.
pub struct Competition<P: Platform> {
    devices:   Devices<P>,
    selection: SelectionHandle,
    program:   AutonomousProgram,
    manual:    ManualLoop,
    config:    RobotConfig,
}

impl<P: Platform> Competition<P> {
    /// Creates the controller. `selection` is usually shared with a
    /// [`Selector`](crate::selection::Selector) driven by the screen buttons.
    pub fn new(devices: Devices<P>, selection: SelectionHandle, config: RobotConfig) -> Self {
        Self {
            devices,
            program: AutonomousProgram::new(&config),
            manual: ManualLoop::new(&config),
            selection,
            config,
        }
    }

    /// The selection read at the start of every run.
    pub fn selection(&self) -> &SelectionHandle { &self.selection }

    /// The controlled devices.
    pub fn devices_mut(&mut self) -> &mut Devices<P> { &mut self.devices }

    /// Runs the selected routine for the autonomous period.
    pub async fn autonomous(&mut self) -> RunReport {
        info!("Autonomous period");
        self.program
            .run(
                &mut self.devices,
                self.selection.snapshot(),
                self.config.auton_keep_going,
            )
            .await
    }

    /// Runs driver control until the host switches modes.
    pub async fn driver(&mut self) {
        info!("Driver control period");
        loop {
            self.driver_tick().await;
            self.devices.clock.sleep(self.config.tick_interval).await;
        }
    }

    /// Runs one driver control tick, and the selected routine if the tick
    /// requested it.
    ///
    /// Returns the report of the routine when one ran.
    pub async fn driver_tick(&mut self) -> Option<RunReport> {
        let input = self.devices.input.snapshot();
        let sensor = self.devices.sensor.is_active();
        let outcome = self.manual.tick(
            &input,
            sensor,
            &mut self.devices.drive,
            &mut self.devices.intake,
        );

        match outcome {
            TickOutcome::Continue => None,
            TickOutcome::AutonomousRequested => {
                info!("Autonomous requested from the controller");
                let report = self
                    .program
                    .run(
                        &mut self.devices,
                        self.selection.snapshot(),
                        self.config.combo_keep_going,
                    )
                    .await;
                Some(report)
            }
        }
    }
}
