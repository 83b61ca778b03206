//! Job posting model

use serde::{Deserialize, Serialize};

use super::labeled_enum;

labeled_enum! {
    /// Employment types offered on the job board
    JobType {
        /// Part-time position
        PartTime => "Part-time",
        /// Full-time position
        FullTime => "Full-time",
        /// Internship
        Internship => "Internship",
        /// Fixed-term contract
        Contract => "Contract",
    }
}

/// A job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Stable identifier
    pub id: String,
    /// Position title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Role description
    pub description: String,
    /// Employment type
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Work location
    #[serde(default)]
    pub location: String,
    /// Advertised salary, free text
    #[serde(default)]
    pub salary: String,
    /// Listed requirements
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Posting date (YYYY-MM-DD)
    #[serde(default)]
    pub posted_date: String,
    /// Application contact
    #[serde(default)]
    pub contact: String,
}
