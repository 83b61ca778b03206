//! Record catalog: where the listing screens get their data
//!
//! Screens depend on the [`RecordSource`] capability rather than on a concrete
//! backend. [`Catalog`] reads a TOML document; the seed data shipped with the
//! binary is one such document (see [`Catalog::builtin`]).

use crate::core::models::{Club, Community, GradeRecord, Job, LostFoundItem, Reminder};
use logger::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed records compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Failure to load a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid catalog TOML
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A grade entry has a negative credit count
    #[error("grade entry '{subject}' has negative credits ({credits})")]
    NegativeCredits {
        /// Subject of the offending entry
        subject: String,
        /// Credits as written
        credits: i64,
    },

    /// A grade entry's credit count does not fit
    #[error("grade entry '{subject}' has too many credits ({credits})")]
    CreditsOverflow {
        /// Subject of the offending entry
        subject: String,
        /// Credits as written
        credits: i64,
    },
}

/// Capability to list records of type `T`
pub trait RecordSource<T> {
    /// Every record, in catalog order
    ///
    /// # Errors
    /// Returns a [`CatalogError`] when the backend cannot produce the records.
    fn records(&self) -> Result<Vec<T>, CatalogError>;
}

impl<T: Clone> RecordSource<T> for Vec<T> {
    fn records(&self) -> Result<Vec<T>, CatalogError> {
        Ok(self.clone())
    }
}

/// Grade entry as written in a catalog document; grade points are derived
#[derive(Debug, Clone, Deserialize)]
struct GradeEntry {
    subject: String,
    grade: String,
    credits: i64,
    #[serde(default)]
    semester: String,
}

impl TryFrom<GradeEntry> for GradeRecord {
    type Error = CatalogError;

    fn try_from(entry: GradeEntry) -> Result<Self, Self::Error> {
        if entry.credits < 0 {
            return Err(CatalogError::NegativeCredits {
                subject: entry.subject,
                credits: entry.credits,
            });
        }
        let Ok(credits) = u32::try_from(entry.credits) else {
            return Err(CatalogError::CreditsOverflow {
                subject: entry.subject,
                credits: entry.credits,
            });
        };
        Ok(Self::new(entry.subject, entry.grade, credits, entry.semester))
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    grades: Vec<GradeEntry>,
    #[serde(default)]
    communities: Vec<Community>,
    #[serde(default)]
    clubs: Vec<Club>,
    #[serde(default)]
    jobs: Vec<Job>,
    #[serde(default)]
    lost_found: Vec<LostFoundItem>,
    #[serde(default)]
    reminders: Vec<Reminder>,
}

/// Records loaded from one TOML document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Graded subjects
    pub grades: Vec<GradeRecord>,
    /// Resource communities
    pub communities: Vec<Community>,
    /// Clubs
    pub clubs: Vec<Club>,
    /// Job postings
    pub jobs: Vec<Job>,
    /// Lost and found posts
    pub lost_found: Vec<LostFoundItem>,
    /// Reminders
    pub reminders: Vec<Reminder>,
}

impl Catalog {
    /// Parse a catalog document
    ///
    /// Every table is optional; missing tables yield empty lists.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the TOML is malformed or a grade entry is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(content)?;
        let grades = document
            .grades
            .into_iter()
            .map(GradeRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self {
            grades,
            communities: document.communities,
            clubs: document.clubs,
            jobs: document.jobs,
            lost_found: document.lost_found,
            reminders: document.reminders,
        };
        debug!(
            "Catalog parsed: {} grades, {} communities, {} clubs, {} jobs, {} lost/found, {} reminders",
            catalog.grades.len(),
            catalog.communities.len(),
            catalog.clubs.len(),
            catalog.jobs.len(),
            catalog.lost_found.len(),
            catalog.reminders.len()
        );
        Ok(catalog)
    }

    /// Load a catalog document from disk
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!("Catalog loaded from {}", path.display());
        Ok(catalog)
    }

    /// The seed records shipped with the binary
    ///
    /// # Errors
    /// Returns a [`CatalogError`] only if the embedded document is broken.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load from `path` when given and non-empty, otherwise the builtin records
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the selected document cannot be loaded.
    pub fn open(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::from_path(p),
            _ => Self::builtin(),
        }
    }
}

macro_rules! catalog_source {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl RecordSource<$ty> for Catalog {
                fn records(&self) -> Result<Vec<$ty>, CatalogError> {
                    Ok(self.$field.clone())
                }
            }
        )+
    };
}

catalog_source! {
    GradeRecord => grades,
    Community => communities,
    Club => clubs,
    Job => jobs,
    LostFoundItem => lost_found,
    Reminder => reminders,
}
