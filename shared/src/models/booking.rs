//! Booking Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Booking owned by the current resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub amenity_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Category label stored by the booking service ("HALL", "GYM", ...)
    #[serde(default)]
    pub amenity_type: Option<String>,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    /// "HH:mm-HH:mm" for hour-based bookings, null for day-based
    #[serde(default)]
    pub time_slot: Option<String>,
    pub slot_start: NaiveDateTime,
    pub slot_end: NaiveDateTime,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Create booking payload (`POST /api/bookings`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub amenity_id: i64,
    /// Category label ("HALL", "BBQ", ...)
    pub amenity_type: String,
    pub booking_date: NaiveDate,
    /// Null for day-based bookings
    pub time_slot: Option<String>,
    pub slot_start: NaiveDateTime,
    pub slot_end: NaiveDateTime,
}
