//! Wall-clock adapter for the core `Clock` port

use chrono::{DateTime, Utc};
use eventstatus_core::Clock;

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
