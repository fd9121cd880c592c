//! Wall-clock time for plan timestamps.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::ClockPort;

/// Reads the system clock. Tests substitute `MockClockPort`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
