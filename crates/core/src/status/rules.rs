//! Status classification rule
//!
//! Maps a group's last event (or its absence) and the current instant to an
//! [`EventStatus`]. Both boundaries are inclusive: an event is still `Active`
//! at its exact end instant and still `InReview` at its exact review deadline.

use chrono::{DateTime, Utc};
use eventstatus_domain::{Event, EventStatus};

/// Classify `event` against `now`.
pub fn classify(event: Option<&Event>, now: DateTime<Utc>) -> EventStatus {
    let Some(event) = event else {
        return EventStatus::Done;
    };

    if now <= event.end_date {
        EventStatus::Active
    } else if now <= event.review_deadline() {
        EventStatus::InReview
    } else {
        EventStatus::Done
    }
}
