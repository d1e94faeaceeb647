use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_DURATION_MINUTES: i64 = 15;
pub const MAX_DURATION_MINUTES: i64 = 120;

/// Raw booking form payload as submitted by the dashboard. Timestamps stay
/// strings until the validator has normalized them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

/// A single rule violation, attributed to the wire name of the offending
/// field so the dashboard can render inline feedback.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A draft that passed every rule, with timestamps normalized to UTC.
#[derive(Debug, Clone)]
pub struct ValidBooking {
    pub requested_by: String,
    pub resource: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Validate a booking draft against the allowed resource set and the window
/// rules. Rules are evaluated independently and every violation is returned,
/// not just the first, so the form can flag all bad fields at once.
///
/// Duration bounds are inclusive: exactly 15 and exactly 120 minutes pass.
/// An empty window (end == start) fails the ordering rule, and the duration
/// rules are only checked once the ordering holds.
pub fn validate_draft(
    draft: &BookingDraft,
    allowed_resources: &[String],
) -> Result<ValidBooking, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.requested_by.is_empty() {
        errors.push(FieldError::new("requestedBy", "Name is required"));
    }

    if !allowed_resources.iter().any(|r| r == &draft.resource) {
        errors.push(FieldError::new("resource", "Resource is required"));
    }

    let start = parse_instant(&draft.start_time);
    if start.is_none() {
        errors.push(FieldError::new("startTime", "Invalid start time"));
    }
    let end = parse_instant(&draft.end_time);
    if end.is_none() {
        errors.push(FieldError::new("endTime", "Invalid end time"));
    }

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.push(FieldError::new("endTime", "End time must be after start time"));
        } else {
            let minutes = (end - start).num_minutes();
            if minutes < MIN_DURATION_MINUTES {
                errors.push(FieldError::new(
                    "endTime",
                    "Booking duration must be at least 15 minutes",
                ));
            } else if minutes > MAX_DURATION_MINUTES {
                errors.push(FieldError::new(
                    "endTime",
                    "Booking duration cannot exceed 2 hours",
                ));
            }
        }
    }

    match (start, end) {
        (Some(start_time), Some(end_time)) if errors.is_empty() => Ok(ValidBooking {
            requested_by: draft.requested_by.clone(),
            resource: draft.resource.clone(),
            start_time,
            end_time,
        }),
        _ => Err(errors),
    }
}

/// Parse a timestamp as it arrives from the form. The dashboard variants
/// submit either full RFC 3339 strings or naive local-input strings
/// (`2025-01-01T09:00`); naive values are taken as UTC.
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}
