use chrono::{DateTime, Utc};

use crate::models::{classify, Booking, FilterOptions};

/// Apply the dashboard filters to a booking list. The three predicates
/// compose conjunctively: resource match, start-of-day/end-of-day window on
/// the start time, and temporal classification against `now`.
pub fn apply_filters(
    bookings: &[Booking],
    filters: &FilterOptions,
    now: DateTime<Utc>,
) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| matches_resource(b, filters))
        .filter(|b| matches_date(b, filters))
        .filter(|b| {
            filters
                .status
                .matches(classify(b.start_time, b.end_time, now))
        })
        .cloned()
        .collect()
}

fn matches_resource(booking: &Booking, filters: &FilterOptions) -> bool {
    match &filters.resource {
        Some(resource) => &booking.resource == resource,
        None => true,
    }
}

fn matches_date(booking: &Booking, filters: &FilterOptions) -> bool {
    let Some(date) = filters.date else {
        return true;
    };
    let day_start = match date.and_hms_opt(0, 0, 0) {
        Some(dt) => dt.and_utc(),
        None => return false,
    };
    let day_end = match date.and_hms_opt(23, 59, 59) {
        Some(dt) => dt.and_utc(),
        None => return false,
    };
    booking.start_time >= day_start && booking.start_time <= day_end
}
