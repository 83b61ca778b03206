//! Integration tests for GPA aggregation

use unimate::models::{grade_points, GradeRecord};
use unimate::progress::{self, Standing};

fn record(subject: &str, grade: &str, credits: u32, semester: &str) -> GradeRecord {
    GradeRecord::new(subject, grade, credits, semester)
}

#[test]
fn grade_scale_matches_letter_tokens() {
    let expected = [
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
        ("E", 0.0),
        ("a", 0.0),
        ("", 0.0),
    ];
    for (grade, points) in expected {
        assert!(
            (grade_points(grade) - points).abs() < f64::EPSILON,
            "{grade} should map to {points}"
        );
    }
}

#[test]
fn weighted_mean_example() {
    let records = vec![
        record("Math", "A", 3, "Semester 1"),
        record("Eng", "B+", 2, "Semester 1"),
    ];
    let summary = progress::summarize(&records);

    assert_eq!(summary.formatted_gpa(), "3.72");
    assert_eq!(summary.total_credits, 5);
    assert_eq!(summary.subject_count, 2);
    assert_eq!(summary.standing, Standing::Excellent);
}

#[test]
fn totals_ignore_input_order() {
    let mut records = vec![
        record("Physics", "B-", 3, "Semester 1"),
        record("Chemistry", "A", 4, "Semester 1"),
        record("Biology", "C+", 2, "Semester 2"),
        record("Statistics", "A-", 3, "Semester 2"),
    ];
    let forward = progress::summarize(&records);
    records.reverse();
    let backward = progress::summarize(&records);

    assert_eq!(forward, backward);
    assert_eq!(forward.total_credits, 12);
}

#[test]
fn gpa_is_rounded_to_two_decimals() {
    // (3.7 * 3 + 3.3 * 3 + 2.7 * 1) / 7 = 3.3857...
    let records = vec![
        record("A", "A-", 3, "S1"),
        record("B", "B+", 3, "S1"),
        record("C", "B-", 1, "S1"),
    ];
    let gpa = progress::overall_gpa(&records);
    assert!((gpa - 3.39).abs() < 1e-9);
    assert_eq!(progress::classify(gpa), Standing::Good);
}

#[test]
fn empty_and_zero_credit_inputs() {
    assert_eq!(progress::summarize(&[]).formatted_gpa(), "0.00");

    let zero = vec![record("Seminar", "A", 0, "S1"), record("Club", "B", 0, "S1")];
    let summary = progress::summarize(&zero);
    assert_eq!(summary.formatted_gpa(), "0.00");
    assert_eq!(summary.total_credits, 0);
    assert_eq!(summary.subject_count, 2);
}

#[test]
fn classification_thresholds() {
    assert_eq!(progress::classify(3.7), Standing::Excellent);
    assert_eq!(progress::classify(3.69999), Standing::Good);
    assert_eq!(progress::classify(3.0), Standing::Good);
    assert_eq!(progress::classify(2.99), Standing::Satisfactory);
    assert_eq!(progress::classify(0.0), Standing::Satisfactory);
}

#[test]
fn semester_breakdown_sums_to_total() {
    let records = vec![
        record("Calculus", "A", 4, "Semester 1"),
        record("Physics", "B", 3, "Semester 2"),
        record("Programming", "A-", 3, "Semester 1"),
    ];
    let semesters = progress::semester_breakdown(&records);
    let credits: u64 = semesters.iter().map(|s| s.summary.total_credits).sum();
    let subjects: usize = semesters.iter().map(|s| s.summary.subject_count).sum();

    assert_eq!(credits, progress::total_credits(&records));
    assert_eq!(subjects, records.len());
    assert_eq!(semesters[0].semester, "Semester 1");
    assert_eq!(semesters[0].summary.formatted_gpa(), "3.87");
}
