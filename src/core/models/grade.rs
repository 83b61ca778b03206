//! Graded subject model

use serde::{Deserialize, Serialize};

/// Letter-grade tokens and the grade points they carry, highest first.
pub const GRADE_SCALE: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

/// Grade points for a letter-grade token.
///
/// Surrounding whitespace is ignored; the token itself is matched exactly, so
/// `"a"` or `"E"` are unrecognized and map to `0.0`.
#[must_use]
pub fn grade_points(grade: &str) -> f64 {
    let token = grade.trim();
    GRADE_SCALE
        .iter()
        .find(|(letter, _)| *letter == token)
        .map_or(0.0, |&(_, points)| points)
}

/// Whether `grade` is one of the tokens in [`GRADE_SCALE`].
#[must_use]
pub fn is_known_grade(grade: &str) -> bool {
    let token = grade.trim();
    GRADE_SCALE.iter().any(|(letter, _)| *letter == token)
}

/// A subject with its letter grade and credit weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Subject name (e.g., "Data Structures")
    pub subject: String,

    /// Letter grade token (e.g., "A-", "B+")
    pub grade: String,

    /// Credit weight of the subject
    pub credits: u32,

    /// Grade points on the 0.0 - 4.0 scale, derived from `grade`
    pub gpa_points: f64,

    /// Semester label (e.g., "Semester 1")
    pub semester: String,
}

impl GradeRecord {
    /// Create a record, deriving `gpa_points` from the letter grade
    ///
    /// # Arguments
    /// * `subject` - Subject name
    /// * `grade` - Letter grade token
    /// * `credits` - Credit weight
    /// * `semester` - Semester label
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        grade: impl Into<String>,
        credits: u32,
        semester: impl Into<String>,
    ) -> Self {
        let grade = grade.into();
        let gpa_points = grade_points(&grade);
        Self {
            subject: subject.into(),
            grade,
            credits,
            gpa_points,
            semester: semester.into(),
        }
    }

    /// Credit-weighted grade points (`gpa_points * credits`)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.gpa_points * f64::from(self.credits)
    }

    /// Whether `gpa_points` agrees with the letter-grade mapping
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.gpa_points - grade_points(&self.grade)).abs() < f64::EPSILON
    }
}
