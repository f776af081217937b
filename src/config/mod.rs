//! Settings lookup for daybook.
//!
//! Every decision reads its flag by name through [`SettingsSource`], so the
//! policy code never touches the process environment directly. Lookups are
//! layered: the environment (optionally seeded from `.env`) wins over the
//! TOML settings file stored at:
//!   `$DAYBOOK_CONFIG` when set, otherwise
//!   `$XDG_CONFIG_HOME/daybook/config.toml` on Linux
//!   `~/Library/Application Support/daybook/config.toml` on macOS
//!   `%APPDATA%/daybook/config.toml` on Windows

mod file;

pub use file::{config_file_path, load_settings_file, CONFIG_FILE_NAME, CONFIG_PATH_VAR};

use anyhow::Result;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// Root folder of the calendar tree.
pub const BASE_PATH: &str = "CALENDAR_BASE_PATH";
/// Root used when [`BASE_PATH`] is unset, relative to the working directory.
pub const DEFAULT_BASE_PATH: &str = "calendar";
/// Global switch allowing creation for dates before today.
pub const CAN_CREATE_PAST_FILES: &str = "CAN_CREATE_PAST_FILES";
/// Optional JSONL file receiving run events.
pub const EVENT_LOG_PATH: &str = "CALENDAR_EVENT_LOG";

/// Read-only access to named settings.
pub trait SettingsSource {
    /// Raw value of `name`, if any layer defines it.
    fn get(&self, name: &str) -> Option<String>;

    /// Boolean setting; only a case-insensitive `true` enables it.
    fn flag(&self, name: &str) -> bool {
        self.get(name)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

impl<S: SettingsSource + ?Sized> SettingsSource for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl<S: SettingsSource + ?Sized> SettingsSource for Box<S> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Process environment, read on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Fixed in-memory settings, used for the settings file and in tests.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: BTreeMap<String, String>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Shorthand for `with(name, "true")`.
    pub fn enable(self, name: impl Into<String>) -> Self {
        self.with(name, "true")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsSource for MapSettings {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Ordered stack of sources; the first layer defining a name wins.
#[derive(Default)]
pub struct LayeredSettings {
    layers: Vec<Box<dyn SettingsSource>>,
}

impl LayeredSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, layer: impl SettingsSource + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl SettingsSource for LayeredSettings {
    fn get(&self, name: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(name))
    }
}

/// Environment over the settings file (when one exists).
pub fn load_settings() -> Result<LayeredSettings> {
    let mut settings = LayeredSettings::new().push(EnvSettings);
    if let Some(path) = config_file_path() {
        if let Some(file) = load_settings_file(&path)? {
            log::debug!("Loaded {} settings from {}", file.len(), path.display());
            settings = settings.push(file);
        }
    }
    Ok(settings)
}

/// Calendar root from [`BASE_PATH`], defaulting to [`DEFAULT_BASE_PATH`].
pub fn calendar_root(settings: &impl SettingsSource) -> PathBuf {
    settings
        .get(BASE_PATH)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_PATH))
}

/// Optional event log path from [`EVENT_LOG_PATH`].
pub fn event_log_path(settings: &impl SettingsSource) -> Option<PathBuf> {
    settings
        .get(EVENT_LOG_PATH)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
