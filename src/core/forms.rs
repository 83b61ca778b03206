//! Required-field validation for the submission forms
//!
//! A field counts as filled when its trimmed value is non-empty. Validation only
//! inspects the form; nothing is stored or mutated when it fails.

use crate::core::models::{
    ComplaintKind, EmergencyKind, GradeRecord, LostFoundCategory, Priority, ReminderCategory,
};
use crate::core::search::ALL;
use thiserror::Error;

/// Why a form submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is blank
    #[error("Please fill in all required fields ({0} is missing)")]
    MissingField(&'static str),

    /// The upload form has no concrete community selected
    #[error("Please fill in all required fields and select a community")]
    CommunityNotSelected,

    /// A named report needs a way to contact the reporter
    #[error("Please provide contact information or select anonymous reporting")]
    ContactRequired,

    /// The credits field is not a non-negative whole number
    #[error("Credits must be a non-negative whole number, got '{0}'")]
    InvalidCredits(String),
}

/// A form that can be checked before submission
pub trait Form {
    /// Check that every required field is filled
    ///
    /// # Errors
    /// Returns the first failed requirement.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(name))
    } else {
        Ok(())
    }
}

/// "Add grade" form on the progress screen
#[derive(Debug, Clone, Default)]
pub struct GradeForm {
    /// Subject name (required)
    pub subject: String,
    /// Letter grade (required)
    pub grade: String,
    /// Credits as typed (required)
    pub credits: String,
    /// Semester label
    pub semester: String,
}

impl Form for GradeForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require("subject", &self.subject)?;
        require("grade", &self.grade)?;
        require("credits", &self.credits)
    }
}

impl GradeForm {
    /// Validate and convert into a [`GradeRecord`]
    ///
    /// # Errors
    /// Returns a [`ValidationError`] when a required field is blank or the credits
    /// are not a non-negative integer.
    pub fn to_record(&self) -> Result<GradeRecord, ValidationError> {
        self.validate()?;
        let credits = self
            .credits
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidCredits(self.credits.trim().to_string()))?;
        Ok(GradeRecord::new(
            self.subject.trim(),
            self.grade.trim(),
            credits,
            self.semester.trim(),
        ))
    }
}

/// "Add reminder" form
#[derive(Debug, Clone, Default)]
pub struct ReminderForm {
    /// Title (required)
    pub title: String,
    /// Details
    pub description: String,
    /// Due date (required)
    pub due_date: String,
    /// Priority, medium unless chosen
    pub priority: Priority,
    /// Category, assignment unless chosen
    pub category: ReminderCategory,
}

impl Form for ReminderForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("due date", &self.due_date)
    }
}

/// Resource upload form
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Title (required)
    pub title: String,
    /// Description
    pub description: String,
    /// Comma-separated tags
    pub tags: String,
    /// Target community name (required, not "All")
    pub community: String,
}

impl Form for UploadForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let community = self.community.trim();
        if self.title.trim().is_empty() || community.is_empty() || community == ALL {
            return Err(ValidationError::CommunityNotSelected);
        }
        Ok(())
    }
}

impl UploadForm {
    /// Tags split on commas, trimmed, blanks dropped
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Lost-and-found post form
#[derive(Debug, Clone)]
pub struct LostFoundForm {
    /// Item title (required)
    pub title: String,
    /// Item description (required)
    pub description: String,
    /// Where (required)
    pub location: String,
    /// Poster contact (required)
    pub contact: String,
    /// Lost or found
    pub category: LostFoundCategory,
}

impl Default for LostFoundForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            contact: String::new(),
            category: LostFoundCategory::Lost,
        }
    }
}

impl Form for LostFoundForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("location", &self.location)?;
        require("contact", &self.contact)
    }
}

/// Incident report form
#[derive(Debug, Clone)]
pub struct ComplaintForm {
    /// Incident kind
    pub kind: ComplaintKind,
    /// What happened (required)
    pub description: String,
    /// Where it happened (required)
    pub location: String,
    /// Report without identifying the reporter
    pub anonymous: bool,
    /// Reporter contact, required unless anonymous
    pub contact: String,
}

impl Default for ComplaintForm {
    fn default() -> Self {
        Self {
            kind: ComplaintKind::default(),
            description: String::new(),
            location: String::new(),
            anonymous: true,
            contact: String::new(),
        }
    }
}

impl Form for ComplaintForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require("description", &self.description)?;
        require("location", &self.location)?;
        if !self.anonymous && self.contact.trim().is_empty() {
            return Err(ValidationError::ContactRequired);
        }
        Ok(())
    }
}

/// Emergency help request form
#[derive(Debug, Clone, Default)]
pub struct EmergencyForm {
    /// Emergency kind
    pub kind: EmergencyKind,
    /// What is happening (required)
    pub description: String,
    /// How to reach the requester (required)
    pub contact: String,
}

impl Form for EmergencyForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require("description", &self.description)?;
        require("contact", &self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_form_requires_subject_grade_credits() {
        let mut form = GradeForm {
            subject: "Operating Systems".to_string(),
            grade: "A-".to_string(),
            credits: "  ".to_string(),
            semester: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("credits")));

        form.credits = "3".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_grade_form_semester_is_optional() {
        let form = GradeForm {
            subject: "Networks".to_string(),
            grade: "B".to_string(),
            credits: "2".to_string(),
            semester: String::new(),
        };
        let record = form.to_record().expect("valid form");
        assert_eq!(record.credits, 2);
        assert!((record.gpa_points - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grade_form_rejects_negative_credits() {
        let form = GradeForm {
            subject: "Networks".to_string(),
            grade: "B".to_string(),
            credits: "-2".to_string(),
            semester: "Semester 1".to_string(),
        };
        assert_eq!(
            form.to_record(),
            Err(ValidationError::InvalidCredits("-2".to_string()))
        );
    }

    #[test]
    fn test_reminder_form() {
        let form = ReminderForm {
            title: "Submit lab report".to_string(),
            ..ReminderForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("due date")));
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.category, ReminderCategory::Assignment);
    }

    #[test]
    fn test_upload_form_needs_concrete_community() {
        let mut form = UploadForm {
            title: "Week 3 notes".to_string(),
            community: "All".to_string(),
            tags: "Notes, ,Week3 ".to_string(),
            ..UploadForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::CommunityNotSelected));

        form.community = "Computer Science".to_string();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.tag_list(), vec!["Notes", "Week3"]);
    }

    #[test]
    fn test_lost_found_form_requires_all_fields() {
        let form = LostFoundForm {
            title: "Blue umbrella".to_string(),
            description: "Left near the library".to_string(),
            location: "Library".to_string(),
            ..LostFoundForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("contact")));
    }

    #[test]
    fn test_complaint_contact_needed_only_when_named() {
        let mut form = ComplaintForm {
            description: "Seniors blocking the hostel entrance".to_string(),
            location: "Hostel B".to_string(),
            ..ComplaintForm::default()
        };
        assert_eq!(form.validate(), Ok(()));

        form.anonymous = false;
        assert_eq!(form.validate(), Err(ValidationError::ContactRequired));

        form.contact = "0771234567".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_emergency_form() {
        let form = EmergencyForm {
            description: "Student fainted in lab 2".to_string(),
            ..EmergencyForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("contact")));
        assert_eq!(form.kind, EmergencyKind::Medical);
    }
}
