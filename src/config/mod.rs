//! Configuration module
//!
//! Builds [`Settings`] once at start-up from an optional YAML file and
//! environment variables. The result is handed to the web layer explicitly.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load settings from `path`, or defaults, then apply environment overrides
pub fn load_from(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let mut settings = Settings::from_file(path)?;
            settings.static_files.private_files.push(path.to_path_buf());
            settings
        }
        None => Settings::default(),
    };
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

/// Locate a settings file: `$SAMUDRA_SETTINGS_PATH`, then the default paths
pub fn find_settings_file() -> Option<PathBuf> {
    let from_env = std::env::var("SAMUDRA_SETTINGS_PATH").ok().map(PathBuf::from);

    from_env
        .into_iter()
        .chain([
            PathBuf::from("settings.yml"),
            PathBuf::from("config/settings.yml"),
        ])
        .find(|p| p.exists())
}
