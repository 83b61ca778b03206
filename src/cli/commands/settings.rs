//! Settings command handler

use crate::args::SettingsSubcommand;
use logger::debug;
use unimate::config::Config;
use unimate::settings::{FileStore, Language, SettingsService};

/// Dispatch settings subcommands against the configured preferences file
pub fn run(subcommand: Option<SettingsSubcommand>, config: &Config) {
    let store = FileStore::new(&config.paths.preferences);
    debug!("Preferences file: {}", store.path().display());
    let mut service = SettingsService::load_from(store);

    match subcommand.unwrap_or(SettingsSubcommand::Show) {
        SettingsSubcommand::Show => {}
        SettingsSubcommand::Language { language } => {
            let language = Language::from(language);
            service.set_language(language);
            println!("✓ Language set to {}", language.display_name());
        }
        SettingsSubcommand::Offline { enabled } => {
            service.set_offline(enabled);
            println!("✓ Offline mode {}", if enabled { "on" } else { "off" });
        }
    }

    let settings = service.settings();
    println!("\n=== Settings ===\n");
    println!(
        "language: {} ({})",
        settings.language.code(),
        settings.language.display_name()
    );
    println!("offline:  {}", settings.offline);
    println!("file:     {}", service.store().path().display());
}
