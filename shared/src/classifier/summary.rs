//! Booking display summaries
//!
//! Resolves what a stored booking looks like to the resident: amenity name,
//! category, date, and the "HH:mm-HH:mm" slot re-derived from the stored
//! start and end when the server did not keep one.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::capacity::{CapacityRule, capacity_for, capacity_for_label};
use super::category::{AmenityCategory, classify};
use super::request::format_time_slot;
use crate::models::{Amenity, Booking, find_amenity};

/// Amenity name for display, `"Amenity {id}"` when not loaded
pub fn amenity_name(amenity_id: i64, amenities: &[Amenity]) -> String {
    match find_amenity(amenities, amenity_id) {
        Some(a) => a.name.clone(),
        None => {
            tracing::warn!(amenity_id, known = amenities.len(), "amenity not found for display");
            format!("Amenity {amenity_id}")
        }
    }
}

/// Display-ready view of a resident's booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: i64,
    pub amenity_id: i64,
    pub amenity_name: String,
    pub category: AmenityCategory,
    pub capacity: CapacityRule,
    pub date: NaiveDate,
    /// `None` for day-based bookings
    pub time_slot: Option<String>,
    pub slot_start: NaiveDateTime,
    pub slot_end: NaiveDateTime,
}

impl BookingSummary {
    pub fn new(booking: &Booking, amenities: &[Amenity]) -> Self {
        let stored = booking
            .amenity_type
            .as_deref()
            .and_then(|label| label.parse::<AmenityCategory>().ok());
        let category = stored.unwrap_or_else(|| classify(booking.amenity_id, amenities));
        let capacity = match booking.amenity_type.as_deref() {
            Some(label) => capacity_for_label(label, category.is_day_based()),
            None => capacity_for(category),
        };

        let time_slot = if category.is_day_based() {
            None
        } else {
            booking
                .time_slot
                .clone()
                .or_else(|| Some(format_time_slot(booking.slot_start, booking.slot_end)))
        };

        Self {
            id: booking.id,
            amenity_id: booking.amenity_id,
            amenity_name: amenity_name(booking.amenity_id, amenities),
            category,
            capacity,
            date: booking.booking_date.unwrap_or_else(|| booking.slot_start.date()),
            time_slot,
            slot_start: booking.slot_start,
            slot_end: booking.slot_end,
        }
    }

    pub fn is_day_based(&self) -> bool {
        self.category.is_day_based()
    }
}
