//! Core module for common functionality across all targets

pub mod catalog;
pub mod config;
pub mod forms;
pub mod models;
pub mod progress;
pub mod report;
pub mod search;
pub mod settings;

/// Returns the current version of the `unimate` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
