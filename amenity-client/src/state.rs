//! Application state owned by the portal
//!
//! Every handler replaces the collection it loads wholesale. There is no
//! request fencing: a late response still overwrites the collection.

use chrono::NaiveDate;
use serde::Serialize;
use shared::classifier::{AmenityCategory, BookingSummary, CapacityRule, DisplayState};
use shared::client::{AuthResponse, Role};
use shared::models::{AdminBooking, AdminStats, Amenity, Booking};

/// Logged-in resident
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        let role = resp.role();
        Self {
            token: resp.token,
            username: resp.username,
            role,
        }
    }
}

/// Availability of one amenity on one date, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityView {
    pub amenity_id: i64,
    pub amenity_name: String,
    pub date: NaiveDate,
    pub category: AmenityCategory,
    pub capacity: CapacityRule,
    pub display: DisplayState,
}

impl AvailabilityView {
    pub fn is_day_based(&self) -> bool {
        self.display.is_day_based()
    }
}

/// Result of a booking attempt that reached the booking service
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// Booking created; availability re-fetched when possible
    Created {
        booking: Booking,
        availability: Option<AvailabilityView>,
    },
    /// Slot or day taken in the meantime; availability re-fetched when possible
    Conflict {
        message: String,
        availability: Option<AvailabilityView>,
    },
}

/// Session and loaded collections
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub amenities: Vec<Amenity>,
    pub bookings: Vec<Booking>,
    /// Last availability shown, refreshed after bookings change
    pub availability: Option<AvailabilityView>,
    pub admin_bookings: Vec<AdminBooking>,
    pub admin_stats: Option<AdminStats>,
    pub admin_dashboard_visible: bool,
}

impl AppState {
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    /// Resident bookings resolved for display
    pub fn booking_summaries(&self) -> Vec<BookingSummary> {
        self.bookings
            .iter()
            .map(|b| BookingSummary::new(b, &self.amenities))
            .collect()
    }

    /// Forget the session and everything loaded under it
    pub fn clear_session(&mut self) {
        self.session = None;
        self.bookings.clear();
        self.admin_bookings.clear();
        self.admin_stats = None;
        self.admin_dashboard_visible = false;
    }

    /// Hide the admin dashboard after a denial
    pub fn deny_admin(&mut self) {
        self.admin_dashboard_visible = false;
    }
}
