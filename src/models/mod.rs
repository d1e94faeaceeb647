pub mod booking;
pub mod classification;
pub mod filters;

pub use booking::{BackendStatus, Booking};
pub use classification::{classify, Classification};
pub use filters::{FilterOptions, StatusFilter};
