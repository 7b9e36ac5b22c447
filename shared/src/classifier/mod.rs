//! Availability classifier
//!
//! Pure functions that turn an amenity id plus the loaded amenity list into a
//! booking category, a capacity rule, and a display state for a server
//! availability payload. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use shared::classifier::{AmenityCategory, DisplayState, build_display_state, classify};
//! use shared::models::{Amenity, AvailabilityResponse};
//!
//! let amenities = vec![Amenity::new(1, "Party Hall")];
//! let category = classify(1, &amenities);
//! assert_eq!(category, AmenityCategory::Hall);
//!
//! let state = build_display_state(&AvailabilityResponse::default(), category);
//! assert!(matches!(state, DisplayState::Day(_)));
//! ```

mod capacity;
mod category;
mod display;
mod request;
mod summary;

pub use capacity::{
    CapacityRule, CapacityUnit, DEFAULT_DAILY_CAPACITY, DEFAULT_HOURLY_CAPACITY, capacity_for,
    capacity_for_label, capacity_in_mode,
};
pub use category::{
    AmenityCategory, CATEGORY_RULES, UnknownCategory, category_from_name, classify, classify_raw,
    is_day_based, resolve_day_basedness, try_classify,
};
pub use display::{
    CLOSING_HOUR, DayAvailability, DisplayState, OPENING_HOUR, SlotAvailability, SlotState,
    build_display_state, classify_slot, day_booking_count, hour_slots, slot_label,
};
pub use request::{build_booking_request, day_window, format_time_slot, parse_slot_time};
pub use summary::{BookingSummary, amenity_name};
