//! Ball detection switch.

use log::warn;
use vexide::prelude::AdiDigitalIn;

use crate::peripherals::DetectionSensor;

/// Limit switch pressed by a captured ball.
pub struct LimitSwitch {
    switch: AdiDigitalIn,
}

impl LimitSwitch {
    /// Wraps the ADI input the switch is wired to.
    pub fn new(switch: AdiDigitalIn) -> Self { Self { switch } }
}

impl DetectionSensor for LimitSwitch {
    fn is_active(&mut self) -> bool {
        self.switch.is_high().unwrap_or_else(|e| {
            warn!("Ball Sensor Error: {}", e);
            false
        })
    }
}
