//! Config command handler
//!
//! Values are checked before they are saved: `level` must name a log level and
//! a non-empty `catalog` must load. `config paths` shows where every file
//! resolves to after `$UNIMATE` expansion.

use crate::args::ConfigSubcommand;
use logger::{info, Level};
use std::io::{self, Write};
use std::path::Path;
use unimate::catalog::Catalog;
use unimate::config::Config;

/// Dispatch config subcommands; exits with status 1 on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Paths) => {
            print!("{}", describe_paths(config));
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

/// Reject values the CLI could not use at startup
fn check_value(key: &str, value: &str) -> Result<(), String> {
    match key {
        "level" => value.parse::<Level>().map(|_| ()),
        "catalog" if !value.is_empty() => Catalog::from_path(Path::new(value))
            .map(|_| ())
            .map_err(|e| format!("Catalog not usable: {e}")),
        "preferences" if value.trim().is_empty() => {
            Err("The preferences file path cannot be empty".to_string())
        }
        _ => Ok(()),
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    check_value(key, value)?;
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config {key} changed");
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!(
        "✓ Reset {key} to default ({})",
        config.get(key).unwrap_or_default()
    );
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm("Reset config to defaults? (y/n): ") {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn presence(path: &str) -> &'static str {
    if Path::new(path).exists() {
        "exists"
    } else {
        "not created yet"
    }
}

/// Resolved file locations, one per line
fn describe_paths(config: &Config) -> String {
    let mut out = String::new();
    let config_file = Config::get_config_file_path();
    out.push_str(&format!(
        "unimate dir:  {}\n",
        Config::get_unimate_dir().display()
    ));
    out.push_str(&format!(
        "config file:  {} ({})\n",
        config_file.display(),
        presence(&config_file.to_string_lossy())
    ));
    if config.data.catalog.is_empty() {
        out.push_str("catalog:      builtin records\n");
    } else {
        out.push_str(&format!(
            "catalog:      {} ({})\n",
            config.data.catalog,
            presence(&config.data.catalog)
        ));
    }
    out.push_str(&format!(
        "preferences:  {} ({})\n",
        config.paths.preferences,
        presence(&config.paths.preferences)
    ));
    out.push_str(&format!(
        "reports dir:  {} ({})\n",
        config.paths.reports_dir,
        presence(&config.paths.reports_dir)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_level_must_parse() {
        assert!(check_value("level", "debug").is_ok());
        assert!(check_value("level", "chatty").is_err());
    }

    #[test]
    fn test_catalog_must_load() {
        let dir = TempDir::new().expect("temp dir");
        let good = dir.path().join("good.toml");
        fs::write(&good, "[[clubs]]\nid = \"1\"\nname = \"Chess\"\ndescription = \"Weekly games\"\ncategory = \"Sports\"\n")
            .expect("write");
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[[grades]]\nsubject = \"Lab\"\ngrade = \"A\"\ncredits = -2\n")
            .expect("write");

        assert!(check_value("catalog", &good.to_string_lossy()).is_ok());
        let err = check_value("catalog", &bad.to_string_lossy()).unwrap_err();
        assert!(err.contains("negative credits"));
        assert!(check_value("catalog", "").is_ok());
    }

    #[test]
    fn test_preferences_cannot_be_blank() {
        assert!(check_value("preferences", "  ").is_err());
        assert!(check_value("preferences", "/tmp/prefs.json").is_ok());
    }

    #[test]
    fn test_describe_paths_shows_builtin_catalog() {
        let mut config = Config::from_defaults();
        config.data.catalog = String::new();
        config.paths.preferences = "/nowhere/prefs.json".to_string();

        let text = describe_paths(&config);
        assert!(text.contains("catalog:      builtin records"));
        assert!(text.contains("/nowhere/prefs.json (not created yet)"));
        assert!(!text.contains("$UNIMATE"));
    }
}
