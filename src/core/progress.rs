//! Academic progress aggregation
//!
//! Reduces a list of graded subjects to a credit-weighted GPA plus the derived
//! statistics shown on the progress screen. All functions are pure.

use crate::core::models::GradeRecord;
use serde::Serialize;
use std::fmt;

/// Lowest GPA classified as [`Standing::Excellent`]
pub const EXCELLENT_THRESHOLD: f64 = 3.7;

/// Lowest GPA classified as [`Standing::Good`]
pub const GOOD_THRESHOLD: f64 = 3.0;

/// Three-tier classification of a GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    /// GPA >= 3.7
    Excellent,
    /// 3.0 <= GPA < 3.7
    Good,
    /// GPA < 3.0
    Satisfactory,
}

impl Standing {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate statistics over a set of graded subjects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Credit-weighted GPA rounded to two decimals (0.0 when no credits)
    pub overall_gpa: f64,
    /// Sum of credits, widened so any number of `u32` entries fits
    pub total_credits: u64,
    /// Number of records
    pub subject_count: usize,
    /// Classification of `overall_gpa`
    pub standing: Standing,
}

impl ProgressSummary {
    /// GPA formatted with exactly two decimals (e.g., `"3.72"`, `"0.00"`)
    #[must_use]
    pub fn formatted_gpa(&self) -> String {
        format!("{:.2}", self.overall_gpa)
    }
}

/// Summary of the subjects taken in one semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester label as stored on the records
    pub semester: String,
    /// Aggregates over that semester's records
    pub summary: ProgressSummary,
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted mean of `gpa_points`, rounded to two decimals
///
/// Returns `0.0` when the total credit count is zero (empty input or only
/// zero-credit records).
#[must_use]
pub fn overall_gpa(records: &[GradeRecord]) -> f64 {
    let credits = total_credits(records);
    if credits == 0 {
        return 0.0;
    }
    let points: f64 = records.iter().map(GradeRecord::quality_points).sum();
    #[allow(clippy::cast_precision_loss)]
    let credits = credits as f64;
    round2(points / credits)
}

/// Sum of credits over every record
#[must_use]
pub fn total_credits(records: &[GradeRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.credits)).sum()
}

/// Classify a GPA value numerically against the two thresholds
#[must_use]
pub fn classify(gpa: f64) -> Standing {
    if gpa >= EXCELLENT_THRESHOLD {
        Standing::Excellent
    } else if gpa >= GOOD_THRESHOLD {
        Standing::Good
    } else {
        Standing::Satisfactory
    }
}

/// Compute the overall GPA, credit total, subject count and standing
///
/// The standing is classified from the rounded GPA, i.e. the value a user sees.
#[must_use]
pub fn summarize(records: &[GradeRecord]) -> ProgressSummary {
    let overall_gpa = overall_gpa(records);
    ProgressSummary {
        overall_gpa,
        total_credits: total_credits(records),
        subject_count: records.len(),
        standing: classify(overall_gpa),
    }
}

/// Summarize each semester separately, in order of first appearance
#[must_use]
pub fn semester_breakdown(records: &[GradeRecord]) -> Vec<SemesterSummary> {
    let mut groups: Vec<(&str, Vec<GradeRecord>)> = Vec::new();
    for record in records {
        if let Some(idx) = groups.iter().position(|(name, _)| *name == record.semester) {
            groups[idx].1.push(record.clone());
        } else {
            groups.push((&record.semester, vec![record.clone()]));
        }
    }

    groups
        .into_iter()
        .map(|(semester, members)| SemesterSummary {
            semester: semester.to_string(),
            summary: summarize(&members),
        })
        .collect()
}
