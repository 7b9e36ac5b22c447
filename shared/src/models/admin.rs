//! Admin views over all residents' bookings

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Booking enriched with resident details (admin listings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBooking {
    pub id: i64,
    pub amenity_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub flat_no: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub slot_start: NaiveDateTime,
    pub slot_end: NaiveDateTime,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Aggregate booking statistics (`GET /api/admin/stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub bookings: Vec<AdminBooking>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_with_fractional_timestamps() {
        let json = r#"{
            "totalBookings": 1,
            "bookings": [{
                "id": 7,
                "amenityId": 2,
                "userId": 3,
                "userName": "alice",
                "userFullName": "Alice A",
                "flatNo": "B-204",
                "contactNumber": null,
                "slotStart": "2024-06-01T10:00:00",
                "slotEnd": "2024-06-01T11:00:00",
                "createdAt": "2024-05-30T08:15:42.123456"
            }]
        }"#;
        let stats: AdminStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.bookings[0].user_name.as_deref(), Some("alice"));
        assert!(stats.bookings[0].contact_number.is_none());
        assert!(stats.bookings[0].created_at.is_some());
    }
}
