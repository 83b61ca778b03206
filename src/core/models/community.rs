//! Resource communities and the files shared in them

use serde::{Deserialize, Serialize};

/// A file shared inside a community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier
    pub id: String,
    /// File title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// File kind as uploaded (e.g., "PDF", "ZIP")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Uploader display name
    #[serde(default)]
    pub uploaded_by: String,
    /// Upload date (YYYY-MM-DD)
    #[serde(default)]
    pub uploaded_at: String,
    /// Human-readable size (e.g., "2.4 MB")
    #[serde(default)]
    pub file_size: String,
    /// Download counter
    #[serde(default)]
    pub downloads: u32,
}

impl Resource {
    /// Whether the resource carries `tag` (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A study community with its shared resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    /// Stable identifier
    pub id: String,
    /// Community name, also used as its selector value
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Member count
    #[serde(default)]
    pub member_count: u32,
    /// Shared files
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Community {
    /// Distinct tags across this community's resources, in first-appearance order
    #[must_use]
    pub fn resource_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.resources.iter().flat_map(|r| r.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Total downloads over every resource
    #[must_use]
    pub fn total_downloads(&self) -> u64 {
        self.resources.iter().map(|r| u64::from(r.downloads)).sum()
    }
}
