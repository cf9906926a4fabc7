//! Event snapshot returned by the last-event repository

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MILLIS_PER_HOUR, NANOS_PER_HOUR};
use crate::{EventStatusError, Result};

/// A time-bounded activity with an end timestamp and an optional review
/// window.
///
/// Field names serialize as `endDate` / `reviewDurationInHours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub end_date: DateTime<Utc>,
    /// Length of the review window; `None` means no review window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_duration_in_hours: Option<f64>,
}

impl Event {
    /// Event without a review window.
    pub fn new(end_date: DateTime<Utc>) -> Self {
        Self { end_date, review_duration_in_hours: None }
    }

    /// Validated constructor.
    ///
    /// # Errors
    /// Returns `EventStatusError::InvalidInput` if `review_duration_in_hours`
    /// is negative, NaN or infinite.
    pub fn try_new(
        end_date: DateTime<Utc>,
        review_duration_in_hours: Option<f64>,
    ) -> Result<Self> {
        let event = Self { end_date, review_duration_in_hours };
        event.validate()?;
        Ok(event)
    }

    /// Set the review window length in hours.
    pub fn with_review_duration_hours(mut self, hours: f64) -> Self {
        self.review_duration_in_hours = Some(hours);
        self
    }

    /// Check the review duration is a finite, non-negative number.
    ///
    /// # Errors
    /// Returns `EventStatusError::InvalidInput` describing the bad value.
    pub fn validate(&self) -> Result<()> {
        match self.review_duration_in_hours {
            Some(hours) if !hours.is_finite() || hours < 0.0 => {
                Err(EventStatusError::InvalidInput(format!(
                    "reviewDurationInHours must be a non-negative number, got {hours}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Review window at nanosecond precision.
    ///
    /// Absent, negative or NaN durations yield a zero window. Fractional
    /// nanoseconds are floored, which keeps the inclusive deadline exact for
    /// `DateTime<Utc>` instants. Windows beyond the nanosecond range (about
    /// 292 years) fall back to millisecond precision.
    pub fn review_duration(&self) -> Duration {
        let hours = self.review_duration_in_hours.unwrap_or(0.0);
        let nanos = (hours * NANOS_PER_HOUR).floor();
        if nanos.is_nan() || nanos <= 0.0 {
            return Duration::zero();
        }
        if nanos < i64::MAX as f64 {
            return Duration::nanoseconds(nanos as i64);
        }

        let millis = (hours * MILLIS_PER_HOUR as f64).floor();
        // `as` saturates at i64::MAX for huge values
        Duration::try_milliseconds(millis as i64).unwrap_or(Duration::MAX)
    }

    /// Last instant at which the event is still in review.
    ///
    /// Saturates at the maximum representable timestamp.
    pub fn review_deadline(&self) -> DateTime<Utc> {
        self.end_date
            .checked_add_signed(self.review_duration())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_duration_is_zero_window() {
        let event = Event::new(end());
        assert_eq!(event.review_duration(), Duration::zero());
        assert_eq!(event.review_deadline(), end());
    }

    #[test]
    fn test_whole_and_fractional_hours() {
        let one_hour = Event::new(end()).with_review_duration_hours(1.0);
        assert_eq!(one_hour.review_duration(), Duration::milliseconds(3_600_000));

        let half_hour = Event::new(end()).with_review_duration_hours(0.5);
        assert_eq!(half_hour.review_deadline(), end() + Duration::minutes(30));

        let two_days = Event::new(end()).with_review_duration_hours(48.0);
        assert_eq!(two_days.review_deadline(), end() + Duration::days(2));
    }

    #[test]
    fn test_sub_millisecond_window_keeps_nanoseconds() {
        // 1.5 ms expressed in hours
        let event = Event::new(end()).with_review_duration_hours(1.5 / 3_600_000.0);
        let window = event.review_duration();

        assert!(window > Duration::microseconds(1_499), "{window}");
        assert!(window <= Duration::microseconds(1_500), "{window}");
    }

    #[test]
    fn test_deadline_saturates_instead_of_overflowing() {
        let event = Event::new(end()).with_review_duration_hours(f64::MAX);
        assert_eq!(event.review_deadline(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_try_new_rejects_invalid_durations() {
        for hours in [-1.0, f64::NAN, f64::INFINITY] {
            let err = Event::try_new(end(), Some(hours)).unwrap_err();
            assert!(matches!(err, EventStatusError::InvalidInput(_)), "hours = {hours}");
        }

        assert!(Event::try_new(end(), Some(0.0)).is_ok());
        assert!(Event::try_new(end(), None).is_ok());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let event: Event = serde_json::from_str(
            r#"{"endDate": "2024-05-01T18:00:00Z", "reviewDurationInHours": 2}"#,
        )
        .unwrap();
        assert_eq!(event.end_date, end());
        assert_eq!(event.review_duration_in_hours, Some(2.0));

        let bare: Event = serde_json::from_str(r#"{"endDate": "2024-05-01T18:00:00Z"}"#).unwrap();
        assert_eq!(bare.review_duration_in_hours, None);
        assert_eq!(
            serde_json::to_value(&bare).unwrap(),
            serde_json::json!({"endDate": "2024-05-01T18:00:00Z"})
        );
    }
}
