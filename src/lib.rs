//! Shared library for `unimate`
//! Contains the campus companion core used by the CLI: grade aggregation, record
//! search, form validation, preferences and the record catalog.

pub mod core;

pub use crate::core::{catalog, config, forms, get_version, models, progress, report, search, settings};
