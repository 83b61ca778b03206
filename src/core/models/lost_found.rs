//! Lost and found board model

use serde::{Deserialize, Serialize};

use super::labeled_enum;

labeled_enum! {
    /// Whether a post reports a lost or a found item
    LostFoundCategory {
        /// Owner is looking for the item
        Lost => "lost",
        /// Someone picked the item up
        Found => "found",
    }
}

/// A lost or found item post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostFoundItem {
    /// Stable identifier
    pub id: String,
    /// Item title
    pub title: String,
    /// Item description
    pub description: String,
    /// Lost or found
    pub category: LostFoundCategory,
    /// Where it was lost or found
    #[serde(default)]
    pub location: String,
    /// Date of the post (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Contact for the poster
    #[serde(default)]
    pub contact: String,
}
