use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Classification;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Ongoing,
    Past,
}

impl StatusFilter {
    pub fn matches(&self, classification: Classification) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => classification == Classification::Upcoming,
            StatusFilter::Ongoing => classification == Classification::Ongoing,
            StatusFilter::Past => classification == Classification::Past,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Selected resource, or `None` for "all".
    pub resource: Option<String>,
    /// Calendar day the booking must start on.
    pub date: Option<NaiveDate>,
    pub status: StatusFilter,
}
