//! Configuration management for the weather skill
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and provides validation for all configuration settings.

use crate::SkillError;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the weather skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Weather API configuration
    pub weather: WeatherConfig,
    /// Skill behaviour
    pub skill: SkillSettings,
    /// Where to look for the weather API key
    pub secrets: SecretsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// HTTP server settings
    pub server: ServerConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Unit system requested from the API
    pub units: String,
    /// Forecast blocks the API should leave out
    pub exclude: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSettings {
    /// JSON file mapping location names to `lat,long` strings
    pub locations_file: String,
    /// Location spoken about when the skill is launched
    pub default_location: String,
    /// IANA timezone used to phrase times of day
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Environment variable holding the API key
    pub env_var: String,
    /// File whose first line holds the API key
    pub fallback_file: String,
    /// Service name of the key in the platform secret store
    pub keyring_service: String,
    /// Account name of the key in the platform secret store
    pub keyring_user: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty, compact or json)
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.darksky.net".to_string(),
            timeout_seconds: 30,
            units: "us".to_string(),
            exclude: "flags,hourly".to_string(),
        }
    }
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            locations_file: "gps_positions.json".to_string(),
            default_location: "home".to_string(),
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            env_var: "DARK_SKY_SECRET_KEY".to_string(),
            fallback_file: "secret_dark_sky".to_string(),
            keyring_service: "weather-skill".to_string(),
            keyring_user: "dark-sky".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl SkillConfig {
    /// Load configuration from the given path, `config.toml` by default, and
    /// environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        let mut builder = Config::builder();
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WEATHER_SKILL_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("WEATHER_SKILL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkillConfig = settings
            .try_deserialize()
            .with_context(|| {
                format!(
                    "Failed to deserialize configuration from {}",
                    config_file.display()
                )
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.timezone()?;
        Ok(())
    }

    /// The configured timezone
    pub fn timezone(&self) -> Result<Tz> {
        self.skill.timezone.parse::<Tz>().map_err(|_| {
            anyhow::Error::from(SkillError::config(format!(
                "Unknown timezone '{}'",
                self.skill.timezone
            )))
        })
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(SkillError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkillError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SkillError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(SkillError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.skill.default_location.trim().is_empty() {
            return Err(SkillError::config("Default location cannot be empty").into());
        }

        Ok(())
    }
}
