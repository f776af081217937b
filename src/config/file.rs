//! TOML settings file.
//!
//! The file holds flat keys named after the settings they provide:
//!
//! ```toml
//! CALENDAR_BASE_PATH = "/home/me/calendar"
//! CAN_CREATE_WORK_FILES = true
//! CAN_CREATE_FUTURE_WORK_FILES = "true"
//! ```

use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::MapSettings;

/// Environment variable pointing at an explicit settings file.
pub const CONFIG_PATH_VAR: &str = "DAYBOOK_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the settings file location.
///
/// Order of precedence:
/// 1. `DAYBOOK_CONFIG` environment variable.
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.config_dir().join("daybook").join(CONFIG_FILE_NAME))
}

/// Loads the settings file, or `None` when it does not exist.
pub fn load_settings_file(path: &Path) -> Result<Option<MapSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {:?}", path))?;
    let settings = MapSettings::from_toml_str(&data)
        .with_context(|| format!("Failed to parse settings file {:?}", path))?;
    Ok(Some(settings))
}

impl MapSettings {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let table: toml::Table = data.parse()?;
        let mut settings = MapSettings::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(text) => text,
                toml::Value::Boolean(flag) => flag.to_string(),
                toml::Value::Integer(number) => number.to_string(),
                other => bail!(
                    "Unsupported value for {key}: expected string, bool or integer, got {}",
                    other.type_str()
                ),
            };
            settings.set(key, value);
        }
        Ok(settings)
    }
}
