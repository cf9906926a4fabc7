//! Last event status service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use eventstatus_domain::{EventStatus, Result};
use tracing::{debug, warn};

use super::ports::{Clock, LastEventRepository};
use super::rules::classify;

/// Determines the lifecycle status of a group's most recent event
///
/// Holds no state besides its collaborators, so one instance can serve
/// concurrent checks for any number of groups.
#[derive(Clone)]
pub struct StatusChecker {
    repository: Arc<dyn LastEventRepository>,
    clock: Arc<dyn Clock>,
}

impl StatusChecker {
    /// Create a new status checker
    pub fn new(repository: Arc<dyn LastEventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Status of the last event of `group_id` as of the clock's current time.
    ///
    /// Makes exactly one repository call. Repository errors are returned
    /// unchanged.
    pub async fn execute(&self, group_id: &str) -> Result<EventStatus> {
        self.check(group_id, None).await
    }

    /// Same as [`execute`](Self::execute) but classifies against `now`
    /// instead of reading the clock.
    pub async fn execute_at(&self, group_id: &str, now: DateTime<Utc>) -> Result<EventStatus> {
        self.check(group_id, Some(now)).await
    }

    async fn check(&self, group_id: &str, at: Option<DateTime<Utc>>) -> Result<EventStatus> {
        let event = match self.repository.load_last_event(group_id).await {
            Ok(event) => event,
            Err(err) => {
                warn!(group_id, error = %err, kind = err.label(), "failed to load last event");
                return Err(err);
            }
        };

        // Read time only once the repository call has completed
        let now = at.unwrap_or_else(|| self.clock.now());
        let status = classify(event.as_ref(), now);

        debug!(
            group_id,
            has_event = event.is_some(),
            status = %status,
            "last event status resolved"
        );
        Ok(status)
    }
}
