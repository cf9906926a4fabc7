//! Port interfaces for last event status checks
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventstatus_domain::{Event, Result};

/// Trait for looking up a group's most recent event
#[async_trait]
pub trait LastEventRepository: Send + Sync {
    /// Load the single most recent event for `group_id`.
    ///
    /// Returns `Ok(None)` when the group has no recorded event; absence is
    /// not an error. Failing to reach storage is reported as
    /// `EventStatusError::Repository`.
    async fn load_last_event(&self, group_id: &str) -> Result<Option<Event>>;
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
