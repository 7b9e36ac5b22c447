//! Amenity Model

use serde::{Deserialize, Serialize};

/// Bookable amenity as listed by the amenity service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: i64,
    pub name: String,
}

impl Amenity {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Find an amenity by id in a loaded list
pub fn find_amenity(amenities: &[Amenity], id: i64) -> Option<&Amenity> {
    amenities.iter().find(|a| a.id == id)
}
