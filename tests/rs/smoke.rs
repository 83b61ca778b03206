//! Integration smoke tests for `unimate`

use unimate::catalog::Catalog;
use unimate::get_version;
use unimate::progress;
use unimate::search::SearchFilter;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn builtin_catalog_drives_every_screen() {
    let catalog = Catalog::builtin().expect("builtin catalog");

    let summary = progress::summarize(&catalog.grades);
    assert_eq!(summary.subject_count, catalog.grades.len());
    assert!(summary.total_credits > 0);

    let everything = SearchFilter::new();
    assert_eq!(everything.apply(&catalog.clubs).len(), catalog.clubs.len());
    assert_eq!(everything.apply(&catalog.jobs).len(), catalog.jobs.len());
    assert_eq!(
        everything.apply(&catalog.lost_found).len(),
        catalog.lost_found.len()
    );
    assert_eq!(
        everything.apply(&catalog.reminders).len(),
        catalog.reminders.len()
    );
    assert_eq!(
        everything.apply(&catalog.communities).len(),
        catalog.communities.len()
    );
}
