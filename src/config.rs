use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SERVER_URL, LOG_LEVEL_ENV, SERVER_URL_ENV,
};
use crate::errors::{InterviewError, InterviewResult};
use log::LevelFilter;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub audio_enabled: bool,
    pub log_level: String,
    pub scenarios: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            audio_enabled: true,
            log_level: "info".to_string(),
            scenarios: vec!["Java Interview".to_string(), "Excel Interview".to_string()],
        }
    }
}

impl Config {
    /// Loads the config from `~/.config/interview-bot/config.json`, then
    /// applies environment overrides.
    pub fn load() -> InterviewResult<Self> {
        let mut config = Self::load_from(&get_config_path()?)?;
        config.apply_overrides(|key| env::var(key).ok());
        validate_config(&config)?;
        Ok(config)
    }

    /// Reads and validates the config at `config_path`, writing the defaults
    /// there first if the file does not exist.
    pub fn load_from(config_path: &Path) -> InterviewResult<Self> {
        if config_path.exists() {
            let config_str = fs::read_to_string(config_path).map_err(|e| {
                InterviewError::config_error(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = serde_json::from_str(&config_str).map_err(|e| {
                InterviewError::config_error(format!("Failed to parse config: {}", e))
            })?;

            validate_config(&config)?;
            Ok(config)
        } else {
            let config = Config::default();

            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    InterviewError::config_error(format!(
                        "Failed to create config directory: {}",
                        e
                    ))
                })?;
            }

            let config_str = serde_json::to_string_pretty(&config).map_err(|e| {
                InterviewError::config_error(format!("Failed to serialize config: {}", e))
            })?;

            fs::write(config_path, config_str).map_err(|e| {
                InterviewError::config_error(format!("Failed to write config file: {}", e))
            })?;

            Ok(config)
        }
    }

    /// Replaces fields whose override variable is set. `lookup` maps a
    /// variable name to its value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.server_url = url;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
    }

    pub fn server_url(&self) -> InterviewResult<Url> {
        parse_server_url(&self.server_url)
    }

    pub fn log_level_filter(&self) -> InterviewResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            InterviewError::config_error(format!("Unknown log level: {}", self.log_level))
        })
    }
}

fn get_config_path() -> InterviewResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| InterviewError::config_error("Could not determine home directory"))?;

    Ok(home_dir
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn parse_server_url(raw: &str) -> InterviewResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| InterviewError::config_error(format!("Invalid server URL {}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InterviewError::config_error(format!(
            "Server URL must use http or https, got {}",
            other
        ))),
    }
}

fn validate_config(config: &Config) -> InterviewResult<()> {
    parse_server_url(&config.server_url)?;
    config.log_level_filter()?;

    if config.scenarios.is_empty() {
        return Err(InterviewError::config_error(
            "At least one scenario is required",
        ));
    }

    if config.scenarios.iter().any(|s| s.trim().is_empty()) {
        return Err(InterviewError::config_error("Scenario names must not be empty"));
    }

    Ok(())
}
