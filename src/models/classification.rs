use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Temporal state of a booking relative to some instant. Derived, never
/// persisted; recomputed for every response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Upcoming,
    Ongoing,
    Past,
}

/// Classify a booking window against `now`. The interval is closed at both
/// ends: a booking is ongoing at its exact start and at its exact end.
///
/// `now` is always passed in explicitly; callers that want wall-clock
/// behavior pass `Utc::now()` themselves.
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Classification {
    if now < start {
        Classification::Upcoming
    } else if now <= end {
        Classification::Ongoing
    } else {
        Classification::Past
    }
}
