pub mod http;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::Booking;
use crate::services::validation::ValidBooking;

/// Client for the remote bookings backend. Persistence, conflict rules, and
/// id assignment all live behind this boundary; the dashboard only reads and
/// forwards.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `POST /bookings` — returns the created booking as the backend stored it.
    async fn create(&self, booking: &ValidBooking) -> anyhow::Result<Booking>;

    /// `GET /bookings` — query params are only sent for filters that are set.
    async fn list(
        &self,
        resource: Option<&str>,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<Vec<Booking>>;

    /// `DELETE /bookings/{id}` — success implies removal upstream.
    async fn cancel(&self, id: &str) -> anyhow::Result<()>;
}
