//! Complaint and emergency request kinds

use super::labeled_enum;

labeled_enum! {
    /// Kinds of incident a student can report
    ComplaintKind {
        /// Ragging
        Ragging => "ragging",
        /// Harassment
        Harassment => "harassment",
        /// Discrimination
        Discrimination => "discrimination",
        /// Bullying
        Bullying => "bullying",
        /// Safety concern on campus
        Safety => "safety",
        /// Anything else
        Other => "other",
    }
}

impl ComplaintKind {
    /// Human-readable label used on the report form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ragging => "Ragging",
            Self::Harassment => "Harassment",
            Self::Discrimination => "Discrimination",
            Self::Bullying => "Bullying",
            Self::Safety => "Safety Concern",
            Self::Other => "Other",
        }
    }
}

impl Default for ComplaintKind {
    fn default() -> Self {
        Self::Ragging
    }
}

labeled_enum! {
    /// Kinds of emergency help request
    EmergencyKind {
        /// Medical emergency
        Medical => "medical",
        /// Immediate safety threat
        Safety => "safety",
        /// Harassment in progress
        Harassment => "harassment",
        /// Anything else
        Other => "other",
    }
}

impl Default for EmergencyKind {
    fn default() -> Self {
        Self::Medical
    }
}
