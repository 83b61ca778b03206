//! Listing command handlers
//!
//! Every browse screen loads its records, narrows them with a [`SearchFilter`]
//! built from the shared `--category/--query/--tag` flags, and prints the rest
//! in input order.

use crate::args::FilterArgs;
use logger::{debug, error, warn};
use unimate::catalog::RecordSource;
use unimate::models::{Club, ClubCategory, Community, Job, JobType, LostFoundCategory};
use unimate::models::{LostFoundItem, Reminder, ReminderCategory, Resource};
use unimate::search::{collect_tags, SearchFilter, Selector};

fn build_filter(args: &FilterArgs) -> SearchFilter {
    let filter = SearchFilter::new()
        .category(&args.category)
        .query(args.query.as_str())
        .tags(args.tags.iter().cloned());
    if filter.is_unrestricted() {
        debug!("No filter given; listing everything");
    } else {
        println!("{}", describe(&filter));
    }
    filter
}

/// One-line summary of the active criteria
fn describe(filter: &SearchFilter) -> String {
    let mut parts = vec![format!("category {}", filter.selector().as_str())];
    if !filter.query_text().is_empty() {
        parts.push(format!("text '{}'", filter.query_text()));
    }
    if !filter.selected_tags().is_empty() {
        parts.push(format!("any tag of {}", filter.selected_tags().join(", ")));
    }
    format!("Filter: {}", parts.join("; "))
}

/// Resource tags with the selected ones starred
fn mark_tags(resource: &Resource, selected: &[String]) -> String {
    let hits: Vec<&String> = selected.iter().filter(|s| resource.has_tag(s)).collect();
    resource
        .tags
        .iter()
        .map(|tag| {
            if hits.contains(&tag) {
                format!("*{tag}")
            } else {
                tag.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn load<T>(source: &impl RecordSource<T>, what: &str) -> Option<Vec<T>> {
    match source.records() {
        Ok(records) => Some(records),
        Err(e) => {
            error!("Failed to load {what}: {e}");
            eprintln!("✗ {e}");
            None
        }
    }
}

/// Warn when the selector names a category outside the closed set
fn check_category(filter: &SearchFilter, known: &[&str]) {
    if let Selector::Exact(value) = filter.selector() {
        if !known.contains(&value.as_str()) {
            warn!(
                "No category '{value}' (expected one of: {})",
                known.join(", ")
            );
        }
    }
}

fn print_count(shown: usize, total: usize, what: &str) {
    println!("\nShowing {shown} of {total} {what}\n");
}

/// List communities and their resources
pub fn resources(source: &impl RecordSource<Community>, args: &FilterArgs) {
    let Some(communities) = load(source, "communities") else {
        return;
    };
    let names: Vec<&str> = communities.iter().map(|c| c.name.as_str()).collect();

    let community_filter = build_filter(args);
    check_category(&community_filter, &names);
    let selector = SearchFilter::new().category(&args.category);
    let resource_filter = SearchFilter::new()
        .query(args.query.as_str())
        .tags(args.tags.iter().cloned());

    let tags = collect_tags(&communities);
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }

    let mut shown = 0;
    for community in selector.apply(&communities) {
        let matching = resource_filter.apply(&community.resources);
        if matching.is_empty() && !community_filter.matches(community) {
            continue;
        }
        shown += 1;
        println!(
            "\n{} ({} members, {} downloads)",
            community.name,
            community.member_count,
            community.total_downloads()
        );
        for resource in matching {
            println!(
                "  - {} [{}] {} | {} | tags: {}",
                resource.title,
                resource.kind,
                resource.file_size,
                resource.uploaded_by,
                mark_tags(resource, &args.tags)
            );
        }
    }
    print_count(shown, communities.len(), "communities");
}

/// List clubs
pub fn clubs(source: &impl RecordSource<Club>, args: &FilterArgs) {
    let Some(clubs) = load(source, "clubs") else {
        return;
    };
    let filter = build_filter(args);
    let known: Vec<&str> = ClubCategory::ALL.iter().map(|c| c.as_str()).collect();
    check_category(&filter, &known);

    let shown = filter.apply(&clubs);
    for club in &shown {
        println!(
            "{:<28} {:<9} {:>4} members  {}",
            club.name, club.category, club.members, club.meeting_time
        );
    }
    print_count(shown.len(), clubs.len(), "clubs");
}

/// List job postings
pub fn jobs(source: &impl RecordSource<Job>, args: &FilterArgs) {
    let Some(jobs) = load(source, "jobs") else {
        return;
    };
    let filter = build_filter(args);
    let known: Vec<&str> = JobType::ALL.iter().map(|t| t.as_str()).collect();
    check_category(&filter, &known);

    let shown = filter.apply(&jobs);
    for job in &shown {
        println!(
            "{} at {} [{}] {} | {}",
            job.title, job.company, job.job_type, job.location, job.salary
        );
    }
    print_count(shown.len(), jobs.len(), "jobs");
}

/// List lost and found posts
pub fn lost_found(source: &impl RecordSource<LostFoundItem>, args: &FilterArgs) {
    let Some(items) = load(source, "lost and found posts") else {
        return;
    };
    let filter = build_filter(args);
    let known: Vec<&str> = LostFoundCategory::ALL.iter().map(|c| c.as_str()).collect();
    check_category(&filter, &known);

    let shown = filter.apply(&items);
    for item in &shown {
        println!(
            "[{}] {} at {} on {} | contact {}",
            item.category, item.title, item.location, item.date, item.contact
        );
    }
    print_count(shown.len(), items.len(), "posts");
}

/// List reminders
pub fn reminders(source: &impl RecordSource<Reminder>, args: &FilterArgs) {
    let Some(reminders) = load(source, "reminders") else {
        return;
    };
    let filter = build_filter(args);
    let known: Vec<&str> = ReminderCategory::ALL.iter().map(|c| c.as_str()).collect();
    check_category(&filter, &known);

    let shown = filter.apply(&reminders);
    for reminder in &shown {
        println!(
            "{} [{} / {}] due {}",
            reminder.title, reminder.category, reminder.priority, reminder.due_date
        );
    }
    print_count(shown.len(), reminders.len(), "reminders");
}
