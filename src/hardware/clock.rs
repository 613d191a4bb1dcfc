//! Brain time.

use std::time::Duration;

use vexide::time::{sleep, user_uptime};

use crate::peripherals::Clock;

/// Time since the user program started, with the executor's sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrainClock;

impl Clock for BrainClock {
    fn now(&self) -> Duration { user_uptime() }

    async fn sleep(&self, duration: Duration) { sleep(duration).await; }
}
