//! HTML report generator
//!
//! Produces a self-contained page with embedded CSS.

use crate::core::report::{GradeRow, ReportContext, ReportGenerator, SemesterCard};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "progress.html")]
struct ProgressPage<'a> {
    title: &'a str,
    gpa: String,
    standing: &'static str,
    total_credits: u64,
    subject_count: usize,
    semesters: Vec<SemesterCard>,
    rows: Vec<GradeRow<'a>>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = ProgressPage {
            title: ctx.title,
            gpa: ctx.summary.formatted_gpa(),
            standing: ctx.summary.standing.label(),
            total_credits: ctx.summary.total_credits,
            subject_count: ctx.summary.subject_count,
            semesters: ctx.semester_cards(),
            rows: ctx.rows(),
        };
        Ok(page.render()?)
    }
}
