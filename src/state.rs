use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::Booking;
use crate::services::api::BookingApi;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn BookingApi>,
    /// Last list of bookings fetched from the backend. Replaced wholesale on
    /// every list request; a successful cancel prunes a single entry by id.
    pub bookings: Mutex<Vec<Booking>>,
}
