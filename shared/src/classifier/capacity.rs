//! Capacity rules per category

use serde::{Deserialize, Serialize};

use super::category::AmenityCategory;

/// Unit a capacity applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CapacityUnit {
    Day,
    Hour,
}

/// Maximum concurrent bookings per day or per hour slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRule {
    pub max_per_unit: u32,
    pub unit: CapacityUnit,
}

impl CapacityRule {
    pub const fn per_day(max_per_unit: u32) -> Self {
        Self {
            max_per_unit,
            unit: CapacityUnit::Day,
        }
    }

    pub const fn per_hour(max_per_unit: u32) -> Self {
        Self {
            max_per_unit,
            unit: CapacityUnit::Hour,
        }
    }

    /// Remaining places once `booked` bookings exist, never negative
    pub fn remaining(&self, booked: u32) -> u32 {
        self.max_per_unit.saturating_sub(booked)
    }

    pub fn is_full(&self, booked: u32) -> bool {
        booked >= self.max_per_unit
    }
}

impl std::fmt::Display for CapacityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            CapacityUnit::Day => write!(f, "{}/day", self.max_per_unit),
            CapacityUnit::Hour => write!(f, "{}/hour", self.max_per_unit),
        }
    }
}

/// Fallback for categories the client cannot resolve in hour context
pub const DEFAULT_HOURLY_CAPACITY: CapacityRule = CapacityRule::per_hour(10);

/// Fallback for categories the client cannot resolve in day context
pub const DEFAULT_DAILY_CAPACITY: CapacityRule = CapacityRule::per_day(1);

/// Fixed capacity table
pub fn capacity_for(category: AmenityCategory) -> CapacityRule {
    match category {
        AmenityCategory::Hall => CapacityRule::per_day(1),
        AmenityCategory::Bbq => CapacityRule::per_day(4),
        AmenityCategory::Tennis => CapacityRule::per_hour(2),
        AmenityCategory::Gym | AmenityCategory::Swimming | AmenityCategory::Parking => {
            CapacityRule::per_hour(10)
        }
    }
}

/// Capacity for a category label coming from the server
///
/// Labels that do not name a known category get the default for the
/// requested context (1/day or 10/hour) and a warning.
pub fn capacity_for_label(label: &str, day_context: bool) -> CapacityRule {
    match label.parse::<AmenityCategory>() {
        Ok(category) => capacity_for(category),
        Err(e) => {
            let fallback = if day_context {
                DEFAULT_DAILY_CAPACITY
            } else {
                DEFAULT_HOURLY_CAPACITY
            };
            tracing::warn!(label, %fallback, "{e}, using default capacity");
            fallback
        }
    }
}

/// Capacity for a category once the day/hour mode has been resolved
///
/// The mode can disagree with the category when the server flags an
/// hour-based category as day-based. The table unit is then meaningless and
/// the default for the resolved mode applies.
pub fn capacity_in_mode(category: AmenityCategory, day_based: bool) -> CapacityRule {
    let rule = capacity_for(category);
    match (day_based, rule.unit) {
        (true, CapacityUnit::Day) | (false, CapacityUnit::Hour) => rule,
        (true, CapacityUnit::Hour) => {
            tracing::warn!(%category, "category is not day-based, using default day capacity");
            DEFAULT_DAILY_CAPACITY
        }
        (false, CapacityUnit::Day) => {
            tracing::warn!(%category, "category is not hour-based, using default hourly capacity");
            DEFAULT_HOURLY_CAPACITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_table() {
        assert_eq!(capacity_for(AmenityCategory::Hall), CapacityRule::per_day(1));
        assert_eq!(capacity_for(AmenityCategory::Bbq), CapacityRule::per_day(4));
        assert_eq!(capacity_for(AmenityCategory::Tennis), CapacityRule::per_hour(2));
        assert_eq!(capacity_for(AmenityCategory::Gym).max_per_unit, 10);
        assert_eq!(capacity_for(AmenityCategory::Swimming).max_per_unit, 10);
        assert_eq!(capacity_for(AmenityCategory::Parking).max_per_unit, 10);
    }

    #[test]
    fn test_table_unit_matches_day_basedness() {
        for category in AmenityCategory::ALL {
            let unit = capacity_for(category).unit;
            assert_eq!(unit == CapacityUnit::Day, category.is_day_based(), "{category}");
        }
    }

    #[test]
    fn test_capacity_for_label() {
        assert_eq!(capacity_for_label("TENNIS", false).max_per_unit, 2);
        assert_eq!(capacity_for_label("sauna", false), DEFAULT_HOURLY_CAPACITY);
        assert_eq!(capacity_for_label("sauna", true), DEFAULT_DAILY_CAPACITY);
    }

    #[test]
    fn test_capacity_in_mode() {
        assert_eq!(
            capacity_in_mode(AmenityCategory::Bbq, true),
            CapacityRule::per_day(4)
        );
        assert_eq!(
            capacity_in_mode(AmenityCategory::Gym, true),
            DEFAULT_DAILY_CAPACITY
        );
        assert_eq!(
            capacity_in_mode(AmenityCategory::Hall, false),
            DEFAULT_HOURLY_CAPACITY
        );
    }

    #[test]
    fn test_remaining_saturates() {
        let rule = CapacityRule::per_hour(2);
        assert_eq!(rule.remaining(1), 1);
        assert_eq!(rule.remaining(5), 0);
        assert!(rule.is_full(2));
        assert!(!rule.is_full(1));
        assert_eq!(rule.to_string(), "2/hour");
    }
}
