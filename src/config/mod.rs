use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub database_id: String,
    pub list_id: String,
    #[serde(default = "default_reporter_name")]
    pub reporter_name: String,
    /// Month-name lookup table, index 0 = January. A fixed table, not
    /// runtime locale negotiation.
    #[serde(default = "default_month_names")]
    pub month_names: Vec<String>,
}

fn default_reporter_name() -> String {
    "Ben Engelhard".to_string()
}

fn default_month_names() -> Vec<String> {
    [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ]
    .iter()
    .map(|m| m.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            list_id: String::new(),
            reporter_name: default_reporter_name(),
            month_names: default_month_names(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timereport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timereport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timereport.conf")
    }

    /// Load the settings file, honoring an explicit `--settings` override.
    /// A missing file is a fatal startup error.
    pub fn load(settings: Option<&str>) -> AppResult<Self> {
        let path = match settings {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Err(AppError::ConfigMissing(path.to_string_lossy().to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Validate the loaded settings before any store call is made.
    pub fn check(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config("api_key is empty".to_string()));
        }
        if self.database_id.is_empty() {
            return Err(AppError::Config("database_id is empty".to_string()));
        }
        if self.list_id.is_empty() {
            return Err(AppError::Config("list_id is empty".to_string()));
        }
        if self.month_names.len() != 12 {
            return Err(AppError::Config(format!(
                "month_names must have 12 entries, found {}",
                self.month_names.len()
            )));
        }
        Ok(())
    }

    /// Month name for a 1-based calendar month.
    pub fn month_label(&self, month: u32) -> AppResult<&str> {
        self.month_names
            .get(month.checked_sub(1).ok_or(AppError::InvalidMonth(month))? as usize)
            .map(String::as_str)
            .ok_or(AppError::InvalidMonth(month))
    }

    /// Write a settings template to `path` (or the default location).
    pub fn init(path: Option<&str>) -> AppResult<PathBuf> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => {
                fs::create_dir_all(Self::config_dir())?;
                Self::config_file()
            }
        };

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Print the active settings file verbatim.
    pub fn print(settings: Option<&str>) -> AppResult<()> {
        let path = match settings {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Err(AppError::ConfigMissing(path.to_string_lossy().to_string()));
        }

        println!("Settings file: {}", path.display());
        println!("{}", fs::read_to_string(&path)?);
        Ok(())
    }
}
