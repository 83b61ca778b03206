//! Progress command handler
//!
//! Prints the GPA summary and per-semester breakdown, checks new grades and
//! renders the progress report.

use crate::args::{ProgressSubcommand, ReportFormatArg};
use logger::{error, info, warn};
use std::path::{Path, PathBuf};
use unimate::catalog::RecordSource;
use unimate::config::Config;
use unimate::forms::GradeForm;
use unimate::models::{grade::is_known_grade, GradeRecord};
use unimate::progress::{self, ProgressSummary};
use unimate::report::{ReportContext, ReportFormat};

/// Dispatch progress subcommands
pub fn run(
    subcommand: Option<ProgressSubcommand>,
    source: &impl RecordSource<GradeRecord>,
    config: &Config,
) {
    let grades = match source.records() {
        Ok(grades) => grades,
        Err(e) => {
            error!("Failed to load grades: {e}");
            eprintln!("✗ {e}");
            return;
        }
    };

    match subcommand.unwrap_or(ProgressSubcommand::Summary) {
        ProgressSubcommand::Summary => print_summary(&progress::summarize(&grades)),
        ProgressSubcommand::Semesters => print_semesters(&grades),
        ProgressSubcommand::Add {
            subject,
            grade,
            credits,
            semester,
        } => {
            let form = GradeForm {
                subject,
                grade,
                credits,
                semester,
            };
            add_grade(grades, &form);
        }
        ProgressSubcommand::Report {
            format,
            output,
            title,
        } => {
            let format = match format {
                ReportFormatArg::Markdown => ReportFormat::Markdown,
                ReportFormatArg::Html => ReportFormat::Html,
            };
            match write_report(&grades, format, output.as_deref(), &title, config) {
                Ok(path) => println!("✓ Report generated: {}", path.display()),
                Err(e) => {
                    error!("Report generation failed: {e}");
                    eprintln!("{e}");
                }
            }
        }
    }
}

fn print_summary(summary: &ProgressSummary) {
    println!("\n=== Academic Progress ===\n");
    println!("Overall GPA:   {} ({})", summary.formatted_gpa(), summary.standing);
    println!("Total credits: {}", summary.total_credits);
    println!("Subjects:      {}", summary.subject_count);
}

fn print_semesters(grades: &[GradeRecord]) {
    let semesters = progress::semester_breakdown(grades);
    if semesters.is_empty() {
        println!("No grades recorded yet.");
        return;
    }
    for semester in &semesters {
        println!(
            "{:<16} GPA {}  {:>3} credits  {} subjects",
            semester.semester,
            semester.summary.formatted_gpa(),
            semester.summary.total_credits,
            semester.summary.subject_count
        );
    }
}

fn add_grade(mut grades: Vec<GradeRecord>, form: &GradeForm) {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    if !is_known_grade(&record.grade) {
        warn!("Unrecognized grade '{}' counts as 0.0 points", record.grade);
    }
    println!(
        "✓ Added {} ({}, {} credits)",
        record.subject, record.grade, record.credits
    );
    grades.push(record);
    print_summary(&progress::summarize(&grades));
}

/// Render the report and write it to `output` or `<reports_dir>/progress.<ext>`
fn write_report(
    grades: &[GradeRecord],
    format: ReportFormat,
    output: Option<&Path>,
    title: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let path = output.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(format!("progress.{}", format.extension()))
        },
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(title, grades);
    format
        .reporter()
        .generate(&ctx, &path)
        .map_err(|e| format!("✗ Failed to write {} report to {}: {e}", format, path.display()))?;

    info!("{format} report written to {}", path.display());
    Ok(path)
}
