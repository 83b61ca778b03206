//! CLI command handlers for `unimate`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod listing;
pub mod progress;
pub mod settings;
pub mod validate;
