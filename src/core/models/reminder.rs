//! Reminder model

use serde::{Deserialize, Serialize};

use super::labeled_enum;

labeled_enum! {
    /// Reminder priority
    Priority {
        /// Needs attention first
        High => "high",
        /// Default priority
        Medium => "medium",
        /// Can wait
        Low => "low",
    }
}

labeled_enum! {
    /// What a reminder is about
    ReminderCategory {
        /// Coursework deadline
        Assignment => "assignment",
        /// Campus event
        Event => "event",
        /// Examination
        Exam => "exam",
        /// Meeting
        Meeting => "meeting",
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Default for ReminderCategory {
    fn default() -> Self {
        Self::Assignment
    }
}

/// A dated reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Details
    #[serde(default)]
    pub description: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: String,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Category
    #[serde(default)]
    pub category: ReminderCategory,
}
