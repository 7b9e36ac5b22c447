//! Booking request construction

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::category::AmenityCategory;
use crate::error::BookingRequestError;
use crate::models::BookingRequest;

fn at_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Fixed booking window of a day-based category, `None` for hour-based ones
///
/// HALL runs 09:00 to 22:00, BBQ 09:00 to 18:00.
pub fn day_window(category: AmenityCategory) -> Option<(NaiveTime, NaiveTime)> {
    match category {
        AmenityCategory::Hall => Some((at_hour(9), at_hour(22))),
        AmenityCategory::Bbq => Some((at_hour(9), at_hour(18))),
        _ => None,
    }
}

/// Parse a slot start given as "HH:mm" (seconds are accepted and dropped)
pub fn parse_slot_time(raw: &str) -> Result<NaiveTime, BookingRequestError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BookingRequestError::InvalidTime(raw.to_string()))
}

/// "HH:mm-HH:mm" label of a booked interval
pub fn format_time_slot(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
}

/// Build the create-booking payload for a selection
///
/// Day-based categories book their whole day window with no time slot.
/// Hour-based categories book one hour from `time`, which is then required.
pub fn build_booking_request(
    amenity_id: i64,
    category: AmenityCategory,
    date: NaiveDate,
    time: Option<NaiveTime>,
) -> Result<BookingRequest, BookingRequestError> {
    let (slot_start, slot_end, time_slot) = match day_window(category) {
        Some((open, close)) => (date.and_time(open), date.and_time(close), None),
        None => {
            let time = time.ok_or_else(|| BookingRequestError::MissingTime {
                category: category.to_string(),
                date,
            })?;
            let start = date.and_time(time);
            let end = start + Duration::hours(1);
            (start, end, Some(format_time_slot(start, end)))
        }
    };

    Ok(BookingRequest {
        amenity_id,
        amenity_type: category.to_string(),
        booking_date: date,
        time_slot,
        slot_start,
        slot_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_hall_request_spans_day() {
        let req = build_booking_request(1, AmenityCategory::Hall, date(), None).unwrap();
        assert_eq!(req.time_slot, None);
        assert_eq!(req.amenity_type, "HALL");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["slotStart"], "2024-06-01T09:00:00");
        assert_eq!(json["slotEnd"], "2024-06-01T22:00:00");
        assert_eq!(json["bookingDate"], "2024-06-01");
        assert!(json["timeSlot"].is_null());
    }

    #[test]
    fn test_bbq_request_ends_at_six() {
        let time = parse_slot_time("14:00").unwrap();
        let req = build_booking_request(2, AmenityCategory::Bbq, date(), Some(time)).unwrap();
        assert_eq!(req.slot_start.format("%H:%M").to_string(), "09:00");
        assert_eq!(req.slot_end.format("%H:%M").to_string(), "18:00");
        assert_eq!(req.time_slot, None);
    }

    #[test]
    fn test_gym_request_is_one_hour() {
        let time = parse_slot_time("10:00").unwrap();
        let req = build_booking_request(4, AmenityCategory::Gym, date(), Some(time)).unwrap();
        assert_eq!(req.time_slot.as_deref(), Some("10:00-11:00"));

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["slotStart"], "2024-06-01T10:00:00");
        assert_eq!(json["slotEnd"], "2024-06-01T11:00:00");
        assert_eq!(json["amenityType"], "GYM");
        assert_eq!(json["amenityId"], 4);
    }

    #[test]
    fn test_late_slot_crosses_midnight() {
        let time = parse_slot_time("23:30").unwrap();
        let req = build_booking_request(4, AmenityCategory::Parking, date(), Some(time)).unwrap();
        assert_eq!(req.time_slot.as_deref(), Some("23:30-00:30"));
        assert_eq!(req.slot_end.date(), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn test_hour_based_requires_time() {
        let err = build_booking_request(3, AmenityCategory::Tennis, date(), None).unwrap_err();
        assert!(matches!(err, BookingRequestError::MissingTime { .. }));
    }

    #[test]
    fn test_parse_slot_time() {
        assert_eq!(parse_slot_time("09:00").unwrap(), at_hour(9));
        assert_eq!(parse_slot_time("16:00:00").unwrap(), at_hour(16));
        assert!(parse_slot_time("9am").is_err());
        assert!(parse_slot_time("25:00").is_err());
    }
}
