//! Amenity Client - HTTP client and action handlers for the booking portal
//!
//! Talks to the amenity, booking and user services and keeps the resident's
//! session and loaded collections in an explicit [`AppState`].

pub mod config;
pub mod error;
pub mod http;
pub mod portal;
pub mod state;

pub use config::ClientConfig;
pub use error::{AuthAction, ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient, SESSION_HEADER, Service};
pub use portal::Portal;
pub use state::{AppState, AvailabilityView, BookingOutcome, Session};

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, LoginRequest, RegisterRequest, Role};
pub use shared::models::{
    AdminBooking, AdminStats, Amenity, AvailabilityResponse, Booking, BookingRequest,
};
