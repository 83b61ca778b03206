//! CLI argument definitions for `unimate`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use unimate::config::ConfigOverrides;
use unimate::search::ALL;
use unimate::settings::Language;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Display language argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LanguageArg {
    /// English
    En,
    /// Sinhala
    Si,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Self::English,
            LanguageArg::Si => Self::Sinhala,
        }
    }
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportFormatArg {
    /// Markdown document
    #[value(alias = "md")]
    Markdown,
    /// Standalone HTML page
    Html,
}

/// Forms accepted by `validate`
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormArg {
    /// Add-grade form (subject, grade, credits, semester)
    Grade,
    /// Reminder form (title, description, due-date, priority, category)
    Reminder,
    /// Resource upload form (title, description, tags, community)
    Upload,
    /// Lost-and-found post (title, description, location, contact, category)
    LostFound,
    /// Incident report (kind, description, location, anonymous, contact)
    Complaint,
    /// Emergency request (kind, description, contact)
    Emergency,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `preferences`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Show where the config, catalog, preferences and reports resolve to.
    Paths,
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ProgressSubcommand {
    /// Overall GPA, credits, subject count and standing (default).
    Summary,
    /// GPA and credits per semester.
    Semesters,
    /// Validate a new grade and show the updated summary.
    Add {
        /// Subject name
        #[arg(long, default_value = "")]
        subject: String,
        /// Letter grade (A+ .. F)
        #[arg(long, default_value = "")]
        grade: String,
        /// Credit weight
        #[arg(long, default_value = "")]
        credits: String,
        /// Semester label
        #[arg(long, default_value = "")]
        semester: String,
    },
    /// Render the progress report to a file.
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormatArg::Html)]
        format: ReportFormatArg,

        /// Output file path (optional; defaults to `progress.<ext>` in the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report heading
        #[arg(long, default_value = "Academic Progress")]
        title: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsSubcommand {
    /// Show the stored preferences (default).
    Show,
    /// Switch the display language.
    Language {
        /// Language code
        #[arg(value_enum)]
        language: LanguageArg,
    },
    /// Turn offline mode on or off.
    Offline {
        /// on/off, true/false, yes/no
        #[arg(action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

/// Filter options shared by every listing command
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Category to show, exact and case-sensitive
    #[arg(short, long, default_value = ALL)]
    pub category: String,

    /// Case-insensitive text to look for
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Keep records carrying any of these tags (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Academic progress: GPA, semesters and reports.
    Progress {
        #[command(subcommand)]
        subcommand: Option<ProgressSubcommand>,
    },
    /// Browse community resources.
    ///
    /// `--category` selects a community by name.
    Resources {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Browse clubs.
    Clubs {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Browse job postings.
    Jobs {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Browse lost and found posts.
    LostFound {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Browse reminders.
    Reminders {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Check a form's required fields.
    ///
    /// Fields are passed as `--field key=value`.
    Validate {
        /// Form to check
        #[arg(value_enum)]
        form: FormArg,

        /// Field values
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Language and offline preferences.
    Settings {
        #[command(subcommand)]
        subcommand: Option<SettingsSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "unimate",
    about = "UniMate campus companion command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog file (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config preferences file
    #[arg(long = "config-preferences", value_name = "FILE")]
    pub config_preferences: Option<PathBuf>,

    /// Override config preferences file (short form)
    #[arg(long = "preferences", value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

/// Parse a `key=value` pair
fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn path_string(short: Option<&PathBuf>, long: Option<&PathBuf>) -> Option<String> {
    short.or(long).map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--catalog`) take precedence
    /// over long-form flags (e.g., `--config-catalog`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: path_string(self.catalog.as_ref(), self.config_catalog.as_ref()),
            preferences: path_string(self.preferences.as_ref(), self.config_preferences.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref(), self.config_reports_dir.as_ref()),
        }
    }
}
