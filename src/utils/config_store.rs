//! ConfigStore - Local Settings Storage
//!
//! Settings live in `settings.toml` under the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::ResultExt;

use crate::domain::config::AppConfig;
use crate::error::{Error, IoSnafu, Result};

const SETTINGS_FILE: &str = "settings.toml";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "example", "admin-console").ok_or(Error::NoConfigDir)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Path of the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// Load settings from `path`, defaults when the file does not exist
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Write settings to `path`, creating parent directories
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).context(IoSnafu { path })?;
    Ok(())
}

/// Load settings from the default location
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&settings_path()?)
}

/// Save settings to the default location
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&settings_path()?, config)
}
