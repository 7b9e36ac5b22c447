//! Classifier errors

use chrono::NaiveDate;
use thiserror::Error;

/// Amenity id not present in the locally loaded amenity list
///
/// Never fatal: callers fall back to the default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amenity {id} not found among {known} loaded amenities")]
pub struct LookupMiss {
    pub id: i64,
    pub known: usize,
}

/// Booking request could not be built from the user's selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRequestError {
    /// Hour-based amenities need a start time
    #[error("a start time is required to book {category} on {date}")]
    MissingTime { category: String, date: NaiveDate },

    /// The time text is not "HH:mm"
    #[error("invalid time '{0}', expected HH:mm")]
    InvalidTime(String),
}
