//! Amenity categories and the name rule table

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::LookupMiss;
use crate::models::{Amenity, find_amenity};
use crate::util::parse_amenity_id;

/// Booking category of an amenity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmenityCategory {
    Hall,
    Bbq,
    Tennis,
    Gym,
    Swimming,
    Parking,
}

/// Ordered name rules: the first entry with a keyword contained in the
/// uppercased amenity name wins.
///
/// BBQ precedes HALL so "BBQ Hall" is a BBQ area. TENNIS precedes GYM.
pub const CATEGORY_RULES: [(AmenityCategory, &[&str]); 6] = [
    (AmenityCategory::Bbq, &["BBQ", "BARBECUE"]),
    (AmenityCategory::Hall, &["HALL", "PARTY"]),
    (AmenityCategory::Tennis, &["TENNIS"]),
    (AmenityCategory::Gym, &["GYM"]),
    (AmenityCategory::Swimming, &["SWIMMING", "POOL"]),
    (AmenityCategory::Parking, &["PARKING", "CAR"]),
];

impl AmenityCategory {
    pub const ALL: [AmenityCategory; 6] = [
        Self::Hall,
        Self::Bbq,
        Self::Tennis,
        Self::Gym,
        Self::Swimming,
        Self::Parking,
    ];

    /// Wire label used by the booking service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hall => "HALL",
            Self::Bbq => "BBQ",
            Self::Tennis => "TENNIS",
            Self::Gym => "GYM",
            Self::Swimming => "SWIMMING",
            Self::Parking => "PARKING",
        }
    }

    /// Human-facing description for day-based categories
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hall => "Community Hall",
            Self::Bbq => "BBQ Area",
            Self::Tennis => "Tennis Court",
            Self::Gym => "Gym",
            Self::Swimming => "Swimming Pool",
            Self::Parking => "Parking",
        }
    }

    pub fn is_day_based(&self) -> bool {
        is_day_based(*self)
    }
}

impl std::fmt::Display for AmenityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Category label the client does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown amenity category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for AmenityCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Derive the category from an amenity name using [`CATEGORY_RULES`]
///
/// Defaults to GYM when no keyword matches.
pub fn category_from_name(name: &str) -> AmenityCategory {
    let upper = name.to_uppercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|k| upper.contains(*k)) {
            tracing::trace!(name, %category, "amenity name matched");
            return category;
        }
    }
    tracing::warn!(name, "no category keyword in amenity name, defaulting to GYM");
    AmenityCategory::Gym
}

/// Classify an amenity id, reporting a miss instead of falling back
pub fn try_classify(amenity_id: i64, amenities: &[Amenity]) -> Result<AmenityCategory, LookupMiss> {
    find_amenity(amenities, amenity_id)
        .map(|a| category_from_name(&a.name))
        .ok_or(LookupMiss {
            id: amenity_id,
            known: amenities.len(),
        })
}

/// Classify an amenity id; unknown ids fall back to GYM with a warning
pub fn classify(amenity_id: i64, amenities: &[Amenity]) -> AmenityCategory {
    try_classify(amenity_id, amenities).unwrap_or_else(|miss| {
        tracing::warn!(amenity_id = miss.id, known = miss.known, "{miss}, defaulting to GYM");
        AmenityCategory::Gym
    })
}

/// Classify an id given as text (form values, CLI arguments)
pub fn classify_raw(raw_id: &str, amenities: &[Amenity]) -> AmenityCategory {
    match parse_amenity_id(raw_id) {
        Some(id) => classify(id, amenities),
        None => {
            tracing::warn!(raw_id, "amenity id is not a number, defaulting to GYM");
            AmenityCategory::Gym
        }
    }
}

/// HALL and BBQ are booked for a whole day
pub fn is_day_based(category: AmenityCategory) -> bool {
    matches!(category, AmenityCategory::Hall | AmenityCategory::Bbq)
}

/// Decide day/hour mode from the local category and the server flag
///
/// A day-based local category wins regardless of the flag; otherwise only
/// an explicit `true` from the server switches to day mode.
pub fn resolve_day_basedness(category: AmenityCategory, api_flag: Option<bool>) -> bool {
    is_day_based(category) || api_flag == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amenities() -> Vec<Amenity> {
        vec![
            Amenity::new(1, "Party Hall"),
            Amenity::new(2, "BBQ Area"),
            Amenity::new(3, "Tennis Court"),
            Amenity::new(4, "Gym"),
            Amenity::new(5, "Swimming Pool"),
            Amenity::new(6, "Car Parking"),
        ]
    }

    #[test]
    fn test_each_rule_keyword() {
        let cases = [
            ("bbq corner", AmenityCategory::Bbq),
            ("Rooftop Barbecue", AmenityCategory::Bbq),
            ("Community Hall", AmenityCategory::Hall),
            ("party room", AmenityCategory::Hall),
            ("Tennis Court", AmenityCategory::Tennis),
            ("gym", AmenityCategory::Gym),
            ("Swimming Area", AmenityCategory::Swimming),
            ("Kids Pool", AmenityCategory::Swimming),
            ("Visitor Parking", AmenityCategory::Parking),
            ("car bay", AmenityCategory::Parking),
        ];
        for (name, expected) in cases {
            assert_eq!(category_from_name(name), expected, "{name}");
        }
    }

    #[test]
    fn test_bbq_wins_over_hall() {
        assert_eq!(category_from_name("BBQ Hall"), AmenityCategory::Bbq);
        assert_eq!(category_from_name("Party Barbecue Hall"), AmenityCategory::Bbq);
    }

    #[test]
    fn test_tennis_wins_over_gym() {
        assert_eq!(category_from_name("Tennis Gym"), AmenityCategory::Tennis);
        assert_eq!(category_from_name("Gym and Tennis"), AmenityCategory::Tennis);
    }

    #[test]
    fn test_hall_wins_over_later_rules() {
        assert_eq!(category_from_name("Pool Hall"), AmenityCategory::Hall);
    }

    #[test]
    fn test_unmatched_name_defaults_to_gym() {
        assert_eq!(category_from_name("Library"), AmenityCategory::Gym);
        assert_eq!(category_from_name(""), AmenityCategory::Gym);
    }

    #[test]
    fn test_classify_by_id() {
        let list = amenities();
        assert_eq!(classify(1, &list), AmenityCategory::Hall);
        assert_eq!(classify(2, &list), AmenityCategory::Bbq);
        assert_eq!(classify(3, &list), AmenityCategory::Tennis);
        assert_eq!(classify(6, &list), AmenityCategory::Parking);
    }

    #[test]
    fn test_unknown_id_falls_back_to_gym() {
        let list = amenities();
        assert_eq!(classify(99, &list), AmenityCategory::Gym);
        assert_eq!(classify(1, &[]), AmenityCategory::Gym);
        assert_eq!(
            try_classify(99, &list),
            Err(LookupMiss { id: 99, known: 6 })
        );
    }

    #[test]
    fn test_classify_raw_coerces_text() {
        let list = amenities();
        assert_eq!(classify_raw("3", &list), AmenityCategory::Tennis);
        assert_eq!(classify_raw(" 2 ", &list), AmenityCategory::Bbq);
        assert_eq!(classify_raw("oops", &list), AmenityCategory::Gym);
    }

    #[test]
    fn test_classification_follows_renames() {
        let mut list = amenities();
        assert_eq!(classify(4, &list), AmenityCategory::Gym);
        list[3].name = "Squash and Tennis".into();
        assert_eq!(classify(4, &list), AmenityCategory::Tennis);
    }

    #[test]
    fn test_is_day_based() {
        for category in AmenityCategory::ALL {
            let expected = matches!(category, AmenityCategory::Hall | AmenityCategory::Bbq);
            assert_eq!(is_day_based(category), expected, "{category}");
        }
    }

    #[test]
    fn test_resolve_day_basedness() {
        assert!(resolve_day_basedness(AmenityCategory::Hall, Some(false)));
        assert!(resolve_day_basedness(AmenityCategory::Bbq, None));
        assert!(resolve_day_basedness(AmenityCategory::Gym, Some(true)));
        assert!(!resolve_day_basedness(AmenityCategory::Gym, None));
        assert!(!resolve_day_basedness(AmenityCategory::Tennis, Some(false)));
    }

    #[test]
    fn test_label_round_trip() {
        for category in AmenityCategory::ALL {
            assert_eq!(category.as_str().parse::<AmenityCategory>(), Ok(category));
        }
        assert_eq!("bbq".parse::<AmenityCategory>(), Ok(AmenityCategory::Bbq));
        assert!("SAUNA".parse::<AmenityCategory>().is_err());
        assert_eq!(
            serde_json::to_string(&AmenityCategory::Swimming).unwrap(),
            "\"SWIMMING\""
        );
    }
}
