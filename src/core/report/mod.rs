//! Progress report generation
//!
//! Renders the academic progress screen (overall GPA, standing, semester cards and
//! the grade table) as a standalone Markdown or HTML document. Templates live in
//! `templates/` and are compiled in with askama.

pub mod html;
pub mod markdown;

use crate::core::models::GradeRecord;
use crate::core::progress::{self, ProgressSummary, SemesterSummary};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown with tables
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Generator for this format
    #[must_use]
    pub fn reporter(self) -> Box<dyn ReportGenerator> {
        match self {
            Self::Markdown => Box::new(MarkdownReporter::new()),
            Self::Html => Box::new(HtmlReporter::new()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// One row of the grade table
#[derive(Debug, Clone)]
pub struct GradeRow<'a> {
    /// Subject name
    pub subject: &'a str,
    /// Letter grade
    pub grade: &'a str,
    /// Credits
    pub credits: u32,
    /// Grade points with one decimal, as displayed in the table
    pub points: String,
    /// Semester label
    pub semester: &'a str,
}

/// One semester card
#[derive(Debug, Clone)]
pub struct SemesterCard {
    /// Semester label
    pub semester: String,
    /// Two-decimal GPA
    pub gpa: String,
    /// Credits taken
    pub credits: u64,
    /// Subjects taken
    pub subjects: usize,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading (e.g., the student's name)
    pub title: &'a str,
    /// Graded subjects in input order
    pub grades: &'a [GradeRecord],
    /// Overall aggregates
    pub summary: ProgressSummary,
    /// Per-semester aggregates
    pub semesters: Vec<SemesterSummary>,
}

impl<'a> ReportContext<'a> {
    /// Aggregate `grades` into a report context
    #[must_use]
    pub fn new(title: &'a str, grades: &'a [GradeRecord]) -> Self {
        Self {
            title,
            grades,
            summary: progress::summarize(grades),
            semesters: progress::semester_breakdown(grades),
        }
    }

    /// Cards for the per-semester section
    #[must_use]
    pub fn semester_cards(&self) -> Vec<SemesterCard> {
        self.semesters
            .iter()
            .map(|s| SemesterCard {
                semester: s.semester.clone(),
                gpa: s.summary.formatted_gpa(),
                credits: s.summary.total_credits,
                subjects: s.summary.subject_count,
            })
            .collect()
    }

    /// Table rows for the grade listing
    #[must_use]
    pub fn rows(&self) -> Vec<GradeRow<'a>> {
        self.grades
            .iter()
            .map(|g| GradeRow {
                subject: &g.subject,
                grade: &g.grade,
                credits: g.credits,
                points: format!("{:.1}", g.gpa_points),
                semester: &g.semester,
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
