//! Data models
//!
//! Wire types exchanged with the amenity, booking and user services.
//! All IDs are `i64`; timestamps are local date-times without offset.

pub mod admin;
pub mod amenity;
pub mod availability;
pub mod booking;

// Re-exports
pub use admin::*;
pub use amenity::*;
pub use availability::*;
pub use booking::*;
