//! Command-line interface entry point for `unimate`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use logger::{enable_debug, enable_verbose, error, info, init_file_logging, set_level, Level};
use std::path::{Path, PathBuf};
use unimate::catalog::Catalog;
use unimate::config::Config;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Settings { subcommand } => {
            commands::settings::run(subcommand, &config);
        }
        Command::Validate { form, fields } => {
            commands::validate::run(form, &fields);
        }
        Command::Progress { subcommand } => {
            let catalog = open_catalog(&config);
            commands::progress::run(subcommand, &catalog, &config);
        }
        Command::Resources { filter } => {
            commands::listing::resources(&open_catalog(&config), &filter);
        }
        Command::Clubs { filter } => {
            commands::listing::clubs(&open_catalog(&config), &filter);
        }
        Command::Jobs { filter } => {
            commands::listing::jobs(&open_catalog(&config), &filter);
        }
        Command::LostFound { filter } => {
            commands::listing::lost_found(&open_catalog(&config), &filter);
        }
        Command::Reminders { filter } => {
            commands::listing::reminders(&open_catalog(&config), &filter);
        }
    }
}

/// Load the configured catalog, or the built-in fixtures when none is set
fn open_catalog(config: &Config) -> Catalog {
    let path = (!config.data.catalog.is_empty()).then(|| Path::new(&config.data.catalog));
    match Catalog::open(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Catalog load failed: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
