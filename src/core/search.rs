//! Multi-criteria filtering shared by the listing screens
//!
//! A [`SearchFilter`] combines three predicates with logical AND:
//! - a category [`Selector`] (`All`, or an exact case-sensitive category value),
//! - a free-text query matched case-insensitively as a substring of any search field,
//! - a tag set, satisfied when the record carries at least one of the requested tags.
//!
//! Filtering is stable: matching records keep their input order.

use crate::core::models::{Club, Community, Job, LostFoundItem, Reminder, Resource};

/// Selector value meaning "no category filtering"
pub const ALL: &str = "All";

/// A record that can be narrowed by [`SearchFilter`]
pub trait Searchable {
    /// Category discriminator compared against the selector
    fn category(&self) -> &str;

    /// Fields searched by the free-text query
    fn search_fields(&self) -> Vec<&str>;

    /// Labels checked by the tag predicate
    fn tags(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Category selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Every category passes
    #[default]
    All,
    /// Only records whose category equals the value exactly
    Exact(String),
}

impl Selector {
    /// Build a selector from a chip value; `"All"` selects everything
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Whether `category` passes this selector
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == category,
        }
    }

    /// The chip value this selector was built from
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Exact(value) => value,
        }
    }
}

/// Combined category, text and tag filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    selector: Selector,
    query: String,
    tags: Vec<String>,
}

impl SearchFilter {
    /// A filter that passes every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category value (`"All"` clears the restriction)
    #[must_use]
    pub fn category(mut self, value: &str) -> Self {
        self.selector = Selector::parse(value);
        self
    }

    /// Set the free-text query
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Require at least one of `tags`
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Current selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Current query
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query
    }

    /// Currently selected tags, in selection order
    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.tags
    }

    /// Select `tag` if it is not selected yet, otherwise deselect it
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Whether the filter passes every record
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.selector == Selector::All && self.query.is_empty() && self.tags.is_empty()
    }

    fn matches_text<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_tags<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let carried = record.tags();
        self.tags.iter().any(|tag| carried.contains(&tag.as_str()))
    }

    /// Whether `record` passes all three predicates
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.selector.accepts(record.category())
            && self.matches_text(record)
            && self.matches_tags(record)
    }

    /// Matching records, in input order
    #[must_use]
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Distinct resource tags across `communities`, in first-appearance order
#[must_use]
pub fn collect_tags(communities: &[Community]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in communities.iter().flat_map(Community::resource_tags) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

impl Searchable for Community {
    fn category(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn tags(&self) -> Vec<&str> {
        self.resource_tags()
    }
}

impl Searchable for Resource {
    fn category(&self) -> &str {
        &self.kind
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

impl Searchable for Club {
    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Job {
    fn category(&self) -> &str {
        self.job_type.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str(), self.description.as_str()]
    }
}

impl Searchable for LostFoundItem {
    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Reminder {
    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        category: &'static str,
        title: &'static str,
        body: &'static str,
        tags: Vec<&'static str>,
    }

    impl Searchable for Note {
        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }

        fn tags(&self) -> Vec<&str> {
            self.tags.clone()
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                category: "Academic",
                title: "Exam schedule",
                body: "Exam schedule released",
                tags: vec!["Notes"],
            },
            Note {
                category: "Arts",
                title: "Guest lecture",
                body: "Guest lecture on AI tomorrow",
                tags: vec!["Tutorial"],
            },
            Note {
                category: "academic",
                title: "Lab slots",
                body: "Lab booking opens",
                tags: vec![],
            },
        ]
    }

    #[test]
    fn test_unrestricted_filter_returns_everything_in_order() {
        let notes = notes();
        let filter = SearchFilter::new().category(ALL).query("").tags(Vec::<String>::new());
        assert!(filter.is_unrestricted());

        let titles: Vec<&str> = filter.apply(&notes).iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Exam schedule", "Guest lecture", "Lab slots"]);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let notes = notes();
        let found = SearchFilter::new().category("Academic").apply(&notes);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Exam schedule");
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let notes = notes();
        let found = SearchFilter::new().query("ai").apply(&notes);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Guest lecture");

        let upper = SearchFilter::new().query("EXAM").apply(&notes);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn test_tags_are_inclusive_or() {
        let notes = notes();
        let found = SearchFilter::new().tags(["Notes", "Tutorial"]).apply(&notes);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].title, "Guest lecture");
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let notes = notes();
        let found = SearchFilter::new()
            .category("Arts")
            .query("exam")
            .apply(&notes);
        assert!(found.is_empty());
    }

    #[test]
    fn test_toggle_tag() {
        let mut filter = SearchFilter::new();
        filter.toggle_tag("Notes");
        filter.toggle_tag("Tutorial");
        assert_eq!(filter.selected_tags(), ["Notes", "Tutorial"]);
        filter.toggle_tag("Notes");
        assert_eq!(filter.selected_tags(), ["Tutorial"]);
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse("All"), Selector::All);
        assert_eq!(Selector::parse("all"), Selector::Exact("all".to_string()));
        assert_eq!(Selector::parse("Sports").as_str(), "Sports");
    }
}
