//! Availability Model
//!
//! Payload of `GET /api/availability?amenityId=&date=`. The booking service
//! omits fields depending on the amenity mode, so every field is optional.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Availability of one amenity on one date, as reported by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityResponse {
    pub amenity_id: Option<i64>,
    /// Date echoed back by the server (YYYY-MM-DD)
    pub date: Option<String>,
    /// Server-side day/hour mode; the local category takes precedence
    pub is_day_based: Option<bool>,
    /// Day-based only: whether at least one booking exists
    pub is_booked: Option<bool>,
    /// Day-based only: number of bookings on the date
    pub booking_count: Option<u32>,
    /// "HH:mm" -> number of bookings starting at that slot
    pub booked_slots: BTreeMap<String, u32>,
    /// Slots the server lists as open ("HH:mm")
    pub available_slots: BTreeSet<String>,
}

impl AvailabilityResponse {
    /// Bookings recorded against a slot, zero when absent
    pub fn booked_at(&self, slot: &str) -> u32 {
        self.booked_slots.get(slot).copied().unwrap_or(0)
    }

    /// Whether the server lists the slot as open
    pub fn is_listed(&self, slot: &str) -> bool {
        self.available_slots.contains(slot)
    }
}
