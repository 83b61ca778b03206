//! Markdown report generator

use crate::core::report::{GradeRow, ReportContext, ReportGenerator, SemesterCard};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "progress.md", escape = "none")]
struct ProgressDocument<'a> {
    title: &'a str,
    gpa: String,
    standing: &'static str,
    total_credits: u64,
    subject_count: usize,
    semesters: Vec<SemesterCard>,
    rows: Vec<GradeRow<'a>>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let document = ProgressDocument {
            title: ctx.title,
            gpa: ctx.summary.formatted_gpa(),
            standing: ctx.summary.standing.label(),
            total_credits: ctx.summary.total_credits,
            subject_count: ctx.summary.subject_count,
            semesters: ctx.semester_cards(),
            rows: ctx.rows(),
        };
        Ok(document.render()?)
    }
}
