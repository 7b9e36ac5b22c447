//! Text rendering of portal data

use amenity_client::{AdminBooking, AdminStats, Amenity, AvailabilityView, BookingOutcome};
use shared::classifier::{
    BookingSummary, DisplayState, SlotState, amenity_name, capacity_for, category_from_name,
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn amenities(list: &[Amenity]) -> String {
    if list.is_empty() {
        return "No amenities available".to_string();
    }
    list.iter()
        .map(|a| {
            let category = category_from_name(&a.name);
            format!("{:>4}  {:<24} {:<9} {}", a.id, a.name, category, capacity_for(category))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn availability(view: &AvailabilityView) -> String {
    let mut lines = vec![format!("{} - {}", view.amenity_name, view.date)];

    match &view.display {
        DisplayState::Day(day) => {
            let place = view.category.display_name();
            match day.state {
                SlotState::Full => {
                    lines.push("Already booked".to_string());
                    lines.push(format!("This {place} is already booked for this date."));
                }
                SlotState::Available { available }
                | SlotState::PartiallyBooked { available, .. } => {
                    lines.push("Available for booking".to_string());
                    lines.push(format!("Book the {place} for the entire day"));
                    lines.push(format!("Available slots: {available}/{}", day.capacity));
                }
                SlotState::NotListed => lines.push("Not available".to_string()),
            }
            lines.push(format!("Bookings: {}/{}", day.booked, day.capacity));
        }
        DisplayState::Hours(slots) => {
            for slot in slots {
                let status = match slot.state {
                    SlotState::Full => "FULL".to_string(),
                    SlotState::Available { available }
                    | SlotState::PartiallyBooked { available, .. } => {
                        format!("{available} available")
                    }
                    SlotState::NotListed => "not available".to_string(),
                };
                let marker = if slot.state.is_bookable() { "  [book]" } else { "" };
                lines.push(format!(
                    "{}  {:<15} {}/{} booked{}",
                    slot.label, status, slot.booked, slot.capacity, marker
                ));
            }
        }
    }
    lines.join("\n")
}

pub fn bookings(summaries: &[BookingSummary]) -> String {
    if summaries.is_empty() {
        return "No bookings found".to_string();
    }
    summaries
        .iter()
        .map(|b| match &b.time_slot {
            Some(slot) => format!("#{:<5} {:<24} {}  {}", b.id, b.amenity_name, b.date, slot),
            None => format!("#{:<5} {:<24} {}  (whole day)", b.id, b.amenity_name, b.date),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn admin_bookings(list: &[AdminBooking], amenities: &[Amenity]) -> String {
    if list.is_empty() {
        return "No bookings found".to_string();
    }
    let mut lines = vec![format!(
        "{:<6} {:<20} {:<12} {:<20} {:<8} {:<16} {:<16} {}",
        "ID", "Amenity", "User", "Name", "Flat", "Start", "End", "Created"
    )];
    for b in list {
        lines.push(format!(
            "{:<6} {:<20} {:<12} {:<20} {:<8} {:<16} {:<16} {}",
            b.id,
            amenity_name(b.amenity_id, amenities),
            b.user_name.as_deref().unwrap_or("N/A"),
            b.user_full_name.as_deref().unwrap_or("N/A"),
            b.flat_no.as_deref().unwrap_or("N/A"),
            b.slot_start.format(TIME_FORMAT),
            b.slot_end.format(TIME_FORMAT),
            b.created_at
                .map(|t| t.format(TIME_FORMAT).to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ));
    }
    lines.join("\n")
}

pub fn stats(stats: &AdminStats) -> String {
    format!("Total bookings: {}", stats.total_bookings)
}

pub fn outcome(outcome: &BookingOutcome) -> String {
    match outcome {
        BookingOutcome::Created { booking, availability } => {
            let mut text = format!("Booking #{} created successfully", booking.id);
            if let Some(view) = availability {
                text.push_str("\n\n");
                text.push_str(&self::availability(view));
            }
            text
        }
        BookingOutcome::Conflict { message, availability } => {
            let mut text = if message.is_empty() {
                "This slot is no longer available".to_string()
            } else {
                message.clone()
            };
            if let Some(view) = availability {
                text.push_str("\n\n");
                text.push_str(&self::availability(view));
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::classifier::{AmenityCategory, CapacityRule, build_display_state};
    use shared::models::AvailabilityResponse;

    fn view(category: AmenityCategory, response: AvailabilityResponse) -> AvailabilityView {
        AvailabilityView {
            amenity_id: 1,
            amenity_name: "Test".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category,
            capacity: capacity_for(category),
            display: build_display_state(&response, category),
        }
    }

    #[test]
    fn test_render_full_hall() {
        let resp = AvailabilityResponse {
            booking_count: Some(1),
            ..Default::default()
        };
        let text = availability(&view(AmenityCategory::Hall, resp));
        assert!(text.contains("Already booked"));
        assert!(text.contains("Community Hall"));
        assert!(text.contains("Bookings: 1/1"));
    }

    #[test]
    fn test_render_hour_slots() {
        let mut resp = AvailabilityResponse::default();
        resp.booked_slots.insert("09:00".into(), 10);
        resp.available_slots.insert("10:00".into());
        let text = availability(&view(AmenityCategory::Gym, resp));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("09:00  FULL"));
        assert!(lines[2].contains("10 available") && lines[2].ends_with("[book]"));
        assert!(lines[3].contains("not available"));
        assert_eq!(capacity_for(AmenityCategory::Gym), CapacityRule::per_hour(10));
    }
}
