//! Global dalryeok configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::filter::ViewMode;

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/dalryeok/events.json";
static DEFAULT_POLL_INTERVAL: &str = "1s";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_poll_interval() -> String {
    DEFAULT_POLL_INTERVAL.to_string()
}

/// Configuration at ~/.config/dalryeok/config.toml, overridable with
/// `DALRYEOK_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DalryeokConfig {
    /// JSON file holding the event list
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// How often reminders are rechecked, e.g. "1s" or "500ms"
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,

    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for DalryeokConfig {
    fn default() -> Self {
        DalryeokConfig {
            events_file: default_events_file(),
            poll_interval: default_poll_interval(),
            default_view: ViewMode::default(),
        }
    }
}

impl DalryeokConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("dalryeok");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file on
    /// first use.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DALRYEOK"))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn poll_interval(&self) -> CalendarResult<Duration> {
        humantime::parse_duration(&self.poll_interval).map_err(|e| {
            CalendarError::Config(format!("Invalid poll_interval '{}': {e}", self.poll_interval))
        })
    }

    pub fn save_to(&self, path: &Path) -> CalendarResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# dalryeok configuration

# Where your events live:
# events_file = \"{}\"

# How often reminders are checked:
# poll_interval = \"{}\"

# View used when none is given (week or month):
# default_view = \"month\"
",
            DEFAULT_EVENTS_FILE, DEFAULT_POLL_INTERVAL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
