//! Shared types for the amenity booking client
//!
//! Wire types for the amenity, booking and user services, and the
//! availability classifier that turns them into display data.

pub mod classifier;
pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use classifier::{AmenityCategory, BookingSummary, CapacityRule, DisplayState, SlotState};
pub use error::{BookingRequestError, LookupMiss};
