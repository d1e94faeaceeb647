use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BookingApi;
use crate::models::Booking;
use crate::services::validation::ValidBooking;

/// What the user sees when the backend gives us nothing better.
pub const FALLBACK_ERROR: &str = "Something is wrong. Please try again later.";

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    requested_by: &'a str,
    resource: &'a str,
    start_time: String,
    end_time: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pick the user-facing message out of a failed response body, preferring
/// the backend's own `message` field.
fn error_message(body: serde_json::Value) -> String {
    serde_json::from_value::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

async fn normalize_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    let message = error_message(body);
    tracing::warn!("bookings backend returned {status}: {message}");
    anyhow!(message)
}

/// Decode a list payload. A non-array body takes the same failure path as a
/// bad fetch.
fn decode_bookings(payload: serde_json::Value) -> anyhow::Result<Vec<Booking>> {
    if !payload.is_array() {
        anyhow::bail!("Expected bookings data to be an array");
    }
    serde_json::from_value(payload).map_err(|_| anyhow!(FALLBACK_ERROR))
}

fn transport_error(err: reqwest::Error) -> anyhow::Error {
    tracing::warn!("bookings backend unreachable: {err}");
    anyhow!(FALLBACK_ERROR)
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn create(&self, booking: &ValidBooking) -> anyhow::Result<Booking> {
        let body = CreateBody {
            requested_by: &booking.requested_by,
            resource: &booking.resource,
            start_time: booking.start_time.to_rfc3339(),
            end_time: booking.end_time.to_rfc3339(),
        };

        let response = self
            .client
            .post(format!("{}/bookings", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(normalize_error(response).await);
        }

        response
            .json::<Booking>()
            .await
            .map_err(|_| anyhow!(FALLBACK_ERROR))
    }

    async fn list(
        &self,
        resource: Option<&str>,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<Vec<Booking>> {
        let mut request = self.client.get(format!("{}/bookings", self.base_url));
        if let Some(resource) = resource {
            request = request.query(&[("resource", resource)]);
        }
        if let Some(date) = date {
            request = request.query(&[("date", date.to_string())]);
        }

        let response = request.send().await.map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(normalize_error(response).await);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|_| anyhow!(FALLBACK_ERROR))?;
        decode_bookings(payload)
    }

    async fn cancel(&self, id: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .delete(format!("{}/bookings/{id}", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(normalize_error(response).await);
        }

        Ok(())
    }
}
