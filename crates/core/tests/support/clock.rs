use chrono::{DateTime, TimeZone, Utc};
use eventstatus_core::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Fixed reference instant shared by the status tests.
    pub fn reference() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
