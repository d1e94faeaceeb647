use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{classify, Booking, Classification, FilterOptions, StatusFilter};
use crate::services::filter::apply_filters;
use crate::services::validation::{validate_draft, BookingDraft};
use crate::state::AppState;

/// A booking decorated with its derived temporal state, as the dashboard
/// renders it. `cancellable` mirrors the classification: past bookings
/// cannot be cancelled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub classification: Classification,
    pub cancellable: bool,
}

impl BookingView {
    fn derive(booking: Booking, now: DateTime<Utc>) -> Self {
        let classification = classify(booking.start_time, booking.end_time, now);
        Self {
            cancellable: classification != Classification::Past,
            classification,
            booking,
        }
    }
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookingDraft>,
) -> Result<impl IntoResponse, AppError> {
    let valid =
        validate_draft(&draft, &state.config.resources).map_err(AppError::Validation)?;

    let created = state
        .api
        .create(&valid)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    tracing::info!(
        "created booking {} for {} ({})",
        created.id,
        created.requested_by,
        created.resource
    );

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct ListQuery {
    pub resource: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<StatusFilter>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<BookingView>>, AppError> {
    let filters = FilterOptions {
        resource: query.resource.filter(|r| r != "all"),
        date: query.date,
        status: query.status.unwrap_or_default(),
    };

    // The backend understands resource and date; the status filter is
    // temporal and only the dashboard can apply it.
    let mut bookings = state
        .api
        .list(filters.resource.as_deref(), filters.date)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    bookings.sort_by_key(|b| b.start_time);

    {
        let mut snapshot = state.bookings.lock().unwrap();
        *snapshot = bookings.clone();
    }

    let now = Utc::now();
    let visible = apply_filters(&bookings, &filters, now);

    Ok(Json(
        visible
            .into_iter()
            .map(|b| BookingView::derive(b, now))
            .collect(),
    ))
}

// DELETE /api/bookings/:id
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let known = {
        let snapshot = state.bookings.lock().unwrap();
        snapshot.iter().find(|b| b.id == id).cloned()
    };

    let booking = match known {
        Some(b) => b,
        None => {
            // Snapshot may be stale or empty; refresh it before giving up.
            let fetched = state
                .api
                .list(None, None)
                .await
                .map_err(|e| AppError::Upstream(e.to_string()))?;
            let found = fetched.iter().find(|b| b.id == id).cloned();
            *state.bookings.lock().unwrap() = fetched;
            found.ok_or_else(|| AppError::NotFound(format!("booking {id} not found")))?
        }
    };

    if classify(booking.start_time, booking.end_time, Utc::now()) == Classification::Past {
        return Err(AppError::PastBooking);
    }

    state
        .api
        .cancel(&id)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    // Prune only after the backend confirmed the delete.
    state.bookings.lock().unwrap().retain(|b| b.id != id);
    tracing::info!("cancelled booking {id}");

    Ok(Json(serde_json::json!({"ok": true})))
}
