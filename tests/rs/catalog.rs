//! Integration tests for catalog loading

use std::fs;
use tempfile::TempDir;
use unimate::catalog::{Catalog, CatalogError, RecordSource};
use unimate::models::{GradeRecord, Reminder};
use unimate::progress;

#[test]
fn builtin_catalog_has_every_table() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    assert!(!catalog.grades.is_empty());
    assert!(!catalog.communities.is_empty());
    assert!(!catalog.clubs.is_empty());
    assert!(!catalog.jobs.is_empty());
    assert!(!catalog.lost_found.is_empty());
    assert!(!catalog.reminders.is_empty());
    assert!(catalog
        .grades
        .iter()
        .all(GradeRecord::is_consistent));
}

#[test]
fn open_without_path_uses_builtin() {
    let builtin = Catalog::builtin().expect("builtin");
    assert_eq!(Catalog::open(None).expect("open"), builtin);
}

#[test]
fn custom_catalog_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("campus.toml");
    fs::write(
        &path,
        r#"
[[grades]]
subject = "Math"
grade = "A"
credits = 3
semester = "Semester 1"

[[grades]]
subject = "Eng"
grade = "B+"
credits = 2
"#,
    )
    .expect("write");

    let catalog = Catalog::open(Some(path.as_path())).expect("custom catalog");
    assert!(catalog.clubs.is_empty());

    let grades: Vec<GradeRecord> = catalog.records().expect("grades");
    assert_eq!(grades[1].semester, "");
    assert_eq!(progress::summarize(&grades).formatted_gpa(), "3.72");
}

#[test]
fn negative_credits_are_rejected() {
    let err = Catalog::from_toml_str(
        r#"
[[grades]]
subject = "Lab"
grade = "A"
credits = -1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::NegativeCredits { credits: -1, .. }));
    assert!(err.to_string().contains("Lab"));
}

#[test]
fn huge_credit_values_sum_without_overflow() {
    let catalog = Catalog::from_toml_str(
        r#"
[[grades]]
subject = "Capstone"
grade = "A"
credits = 4294967295

[[grades]]
subject = "Seminar"
grade = "B"
credits = 1
"#,
    )
    .expect("both entries fit in u32");

    let summary = progress::summarize(&catalog.grades);
    assert_eq!(summary.total_credits, 4_294_967_296);
    assert_eq!(summary.subject_count, 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = Catalog::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn vec_is_a_record_source() {
    let reminders: Vec<Reminder> = Catalog::builtin().expect("builtin").reminders;
    let again: Vec<Reminder> = reminders.records().expect("records");
    assert_eq!(again, reminders);
}
