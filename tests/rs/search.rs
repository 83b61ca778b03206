//! Integration tests for record filtering over the builtin catalog

use unimate::catalog::Catalog;
use unimate::models::{Club, ClubCategory, Community, JobType, LostFoundCategory, Resource};
use unimate::search::{collect_tags, SearchFilter, ALL};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

fn club(name: &str, description: &str, category: ClubCategory) -> Club {
    Club {
        id: name.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        members: 10,
        meeting_time: String::new(),
        contact: String::new(),
    }
}

#[test]
fn unrestricted_filter_keeps_order() {
    let catalog = catalog();
    let shown = SearchFilter::new()
        .category(ALL)
        .query("")
        .apply(&catalog.clubs);
    let names: Vec<&str> = shown.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = catalog.clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn category_selects_exact_value() {
    let catalog = catalog();
    let academic = SearchFilter::new().category("Academic").apply(&catalog.clubs);
    assert!(!academic.is_empty());
    assert!(academic.iter().all(|c| c.category == ClubCategory::Academic));

    assert!(SearchFilter::new()
        .category("academic")
        .apply(&catalog.clubs)
        .is_empty());
}

#[test]
fn query_matches_description_case_insensitively() {
    let clubs = vec![
        club("Tech Talks", "Guest lecture on AI tomorrow", ClubCategory::Academic),
        club("Chess", "Weekly matches", ClubCategory::Sports),
    ];
    let shown = SearchFilter::new().query("ai").apply(&clubs);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Tech Talks");
}

#[test]
fn jobs_filter_by_type_and_company() {
    let catalog = catalog();
    let internships = SearchFilter::new()
        .category(JobType::Internship.as_str())
        .apply(&catalog.jobs);
    assert!(internships.iter().all(|j| j.job_type == JobType::Internship));

    let company = &catalog.jobs[0].company;
    let by_company = SearchFilter::new()
        .query(company.to_uppercase())
        .apply(&catalog.jobs);
    assert!(by_company.iter().any(|j| &j.company == company));
}

#[test]
fn lost_found_categories_are_lowercase() {
    let catalog = catalog();
    let lost = SearchFilter::new()
        .category(LostFoundCategory::Lost.as_str())
        .apply(&catalog.lost_found);
    let found = SearchFilter::new()
        .category(LostFoundCategory::Found.as_str())
        .apply(&catalog.lost_found);
    assert_eq!(lost.len() + found.len(), catalog.lost_found.len());
    assert!(SearchFilter::new()
        .category("Lost")
        .apply(&catalog.lost_found)
        .is_empty());
}

#[test]
fn tags_use_inclusive_or() {
    let catalog = catalog();
    let resources: Vec<Resource> = catalog
        .communities
        .iter()
        .flat_map(|c| c.resources.iter().cloned())
        .collect();

    let shown = SearchFilter::new()
        .tags(["Notes", "Tutorial"])
        .apply(&resources);
    assert!(shown.iter().any(|r| r.tags == ["Tutorial", "Databases"]));
    assert!(shown
        .iter()
        .all(|r| r.has_tag("Notes") || r.has_tag("Tutorial")));
}

#[test]
fn community_selector_and_tags() {
    let catalog = catalog();
    let shown: Vec<&Community> = SearchFilter::new()
        .category("Engineering")
        .tags(["Exams"])
        .apply(&catalog.communities);
    assert_eq!(shown.len(), 1);

    // A community without resources carries no tags
    let untagged = SearchFilter::new()
        .category("Medicine")
        .tags(["Notes"])
        .apply(&catalog.communities);
    assert!(untagged.is_empty());
}

#[test]
fn collected_tags_are_distinct() {
    let catalog = catalog();
    let tags = collect_tags(&catalog.communities);
    assert_eq!(tags[0], "Notes");
    let mut deduped = tags.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), tags.len());
}
