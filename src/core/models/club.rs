//! Student club model

use serde::{Deserialize, Serialize};

use super::labeled_enum;

labeled_enum! {
    /// Club categories shown as filter chips
    ClubCategory {
        /// Subject societies and study groups
        Academic => "Academic",
        /// Drama, music and visual arts
        Arts => "Arts",
        /// Volunteering and community service
        Service => "Service",
        /// Sports teams
        Sports => "Sports",
        /// Cultural and heritage societies
        Cultural => "Cultural",
    }
}

/// A student club or society
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Stable identifier
    pub id: String,
    /// Club name
    pub name: String,
    /// Short description
    pub description: String,
    /// Category
    pub category: ClubCategory,
    /// Number of members
    #[serde(default)]
    pub members: u32,
    /// Regular meeting slot (e.g., "Fridays 4:00 PM")
    #[serde(default)]
    pub meeting_time: String,
    /// Contact e-mail or phone
    #[serde(default)]
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in ClubCategory::ALL {
            assert_eq!(category.as_str().parse::<ClubCategory>(), Ok(*category));
        }
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        let err = "academic".parse::<ClubCategory>().unwrap_err();
        assert!(err.contains("academic"));
        assert!(err.contains("Academic"));
    }
}
