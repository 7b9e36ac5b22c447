//! Display state derived from an availability payload
//!
//! Maps `(AvailabilityResponse, AmenityCategory)` to plain data. Rendering
//! to markup or text happens elsewhere.

use chrono::NaiveTime;
use serde::Serialize;

use super::capacity::capacity_in_mode;
use super::category::{AmenityCategory, resolve_day_basedness};
use crate::models::AvailabilityResponse;

/// First bookable hour slot
pub const OPENING_HOUR: u32 = 9;
/// End of the working window; the last slot starts one hour earlier
pub const CLOSING_HOUR: u32 = 17;

/// State of one hour slot or one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotState {
    Full,
    PartiallyBooked { available: u32, booked: u32 },
    Available { available: u32 },
    NotListed,
}

impl SlotState {
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::PartiallyBooked { .. } | Self::Available { .. })
    }
}

/// One hourly slot of an hour-based amenity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub start: NaiveTime,
    /// "HH:mm", the key used by the booking service
    pub label: String,
    pub booked: u32,
    pub capacity: u32,
    pub state: SlotState,
}

/// Whole-day availability of a day-based amenity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub booked: u32,
    pub capacity: u32,
    pub state: SlotState,
}

/// What to show for one amenity on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "availability", rename_all = "lowercase")]
pub enum DisplayState {
    Day(DayAvailability),
    Hours(Vec<SlotAvailability>),
}

impl DisplayState {
    pub fn is_day_based(&self) -> bool {
        matches!(self, Self::Day(_))
    }
}

/// Start times of the hourly slots, 09:00 through 16:00
pub fn hour_slots() -> impl Iterator<Item = NaiveTime> {
    (OPENING_HOUR..CLOSING_HOUR).filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
}

/// "HH:mm" label of a slot start
pub fn slot_label(start: NaiveTime) -> String {
    start.format("%H:%M").to_string()
}

/// Bookings recorded for the day
///
/// `bookingCount` when positive, else the number of booked slot entries,
/// else one if the server only says the day is booked.
pub fn day_booking_count(response: &AvailabilityResponse) -> u32 {
    match response.booking_count {
        Some(count) if count > 0 => count,
        _ if !response.booked_slots.is_empty() => {
            u32::try_from(response.booked_slots.len()).unwrap_or(u32::MAX)
        }
        _ if response.is_booked == Some(true) => 1,
        _ => 0,
    }
}

/// State of a single hour slot
///
/// Checks run FULL, then PARTIALLY_BOOKED, then AVAILABLE, then NOT_LISTED,
/// so a slot at capacity is full even when the server still lists it.
pub fn classify_slot(booked: u32, capacity: u32, listed: bool) -> SlotState {
    if booked >= capacity {
        SlotState::Full
    } else if booked > 0 {
        SlotState::PartiallyBooked {
            available: capacity - booked,
            booked,
        }
    } else if listed {
        SlotState::Available {
            available: capacity,
        }
    } else {
        SlotState::NotListed
    }
}

/// Build the display state for an amenity category and payload
pub fn build_display_state(
    response: &AvailabilityResponse,
    category: AmenityCategory,
) -> DisplayState {
    let day_based = resolve_day_basedness(category, response.is_day_based);
    let capacity = capacity_in_mode(category, day_based).max_per_unit;

    if day_based {
        let booked = day_booking_count(response);
        let state = if booked >= capacity {
            SlotState::Full
        } else {
            SlotState::Available {
                available: capacity - booked,
            }
        };
        tracing::debug!(%category, booked, capacity, "day availability");
        return DisplayState::Day(DayAvailability {
            booked,
            capacity,
            state,
        });
    }

    let slots = hour_slots()
        .map(|start| {
            let label = slot_label(start);
            let booked = response.booked_at(&label);
            let state = classify_slot(booked, capacity, response.is_listed(&label));
            SlotAvailability {
                start,
                label,
                booked,
                capacity,
                state,
            }
        })
        .collect();
    DisplayState::Hours(slots)
}
