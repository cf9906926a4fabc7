//! Lifecycle status of a group's most recent event

use serde::{Deserialize, Serialize};

/// Computed lifecycle state of a group's last event.
///
/// Never persisted; derived fresh from the event and the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
    /// No event, or the review window has elapsed
    Done,
    /// The event has not ended yet (end instant included)
    Active,
    /// The event ended and its review window is still open
    InReview,
}

impl EventStatus {
    /// Whether nothing further will happen for this event.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

crate::impl_domain_status_conversions!(EventStatus {
    Done => "done",
    Active => "active",
    InReview => "inReview",
});
