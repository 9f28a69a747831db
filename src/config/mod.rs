use crate::core::present::{DEFAULT_TITLE_MAX_LEN, MenuScope, PresentationOptions};
use crate::errors::{AppError, AppResult};
use crate::models::window::WindowMode;
use crate::utils::path::expand_tilde;
use crate::utils::time::TimeStyle;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the configuration directory (used by tests and portable setups).
pub const HOME_ENV: &str = "QUICKCAL_HOME";

pub const DEFAULT_REFRESH_SECS: u64 = 300;

const KNOWN_FIELDS: &[&str] = &[
    "database",
    "calendars",
    "refresh_interval_secs",
    "time_format",
    "title_max_len",
    "window",
    "menu_scope",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    /// Calendar ids or titles to include; empty means every calendar.
    pub calendars: Vec<String>,
    pub refresh_interval_secs: u64,
    pub time_format: TimeStyle,
    pub title_max_len: usize,
    pub window: WindowMode,
    pub menu_scope: MenuScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            calendars: Vec::new(),
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            time_format: TimeStyle::default(),
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            window: WindowMode::default(),
            menu_scope: MenuScope::default(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$QUICKCAL_HOME`, or `~/.quickcal`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("quickcal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".quickcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("quickcal.conf")
    }

    /// Return the default path of the calendar store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("calendar.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty or comment-only file is null, not a mapping.
        let value: Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_value(value)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "refresh_interval_secs must be greater than zero".into(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        Ok(())
    }

    /// Path of the calendar store with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn presentation_options(&self) -> PresentationOptions {
        PresentationOptions {
            title_max_len: self.title_max_len,
            menu_scope: self.menu_scope,
        }
    }

    /// Known fields that are absent from a YAML document.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value = serde_yaml::from_str(content)?;
        let map = yaml.as_mapping();

        Ok(KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| {
                map.map(|m| !m.contains_key(*k)).unwrap_or(true)
            })
            .collect())
    }

    /// Write the config file and return its path.
    pub fn init_file(custom_db: Option<&str>) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(name) = custom_db {
            let p = expand_tilde(name);
            let p = if p.is_absolute() { p } else { dir.join(p) };
            config.database = p.to_string_lossy().to_string();
        }

        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(&config)?)?;
        Ok(path)
    }
}
