//! Configuration management for the heat risk checker
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::HeatRiskError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure for `heatrisk`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatRiskConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP server settings for `heatrisk serve`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl WeatherConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl HeatRiskConfig {
    /// Load configuration from specified path.
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load_from_path(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                if let Some(default_path) = Self::get_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(
                        File::from(default_path)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // Environment overrides, e.g. HEATRISK_WEATHER__TIMEOUT_SECONDS=5
        builder = builder.add_source(
            Environment::with_prefix("HEATRISK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: HeatRiskConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("heatrisk").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> std::result::Result<(), HeatRiskError> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> std::result::Result<(), HeatRiskError> {
        if self.weather.timeout_seconds == 0 {
            return Err(HeatRiskError::config(
                "Weather API timeout must be at least 1 second",
            ));
        }

        if self.weather.timeout_seconds > 120 {
            return Err(HeatRiskError::config(
                "Weather API timeout cannot exceed 120 seconds",
            ));
        }

        if self.server.port == 0 {
            return Err(HeatRiskError::config("Server port cannot be 0"));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> std::result::Result<(), HeatRiskError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(HeatRiskError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(HeatRiskError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(HeatRiskError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("heatrisk-{}-{name}.toml", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = HeatRiskConfig::default();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.weather.timeout(), Duration::from_secs(10));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = HeatRiskConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = HeatRiskConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(
            config.validate(),
            Err(HeatRiskError::Config { .. })
        ));
    }

    #[test]
    fn test_config_validation_timeout_bounds() {
        let mut config = HeatRiskConfig::default();
        config.weather.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        config.weather.timeout_seconds = 120;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = HeatRiskConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = HeatRiskConfig::default();
        config.weather.base_url = String::new();
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp_config(
            "file",
            "[weather]\nbase_url = \"http://localhost:9999/v1\"\ntimeout_seconds = 3\n\n[logging]\nformat = \"json\"\n",
        );

        let config = HeatRiskConfig::load_from_path(Some(&path)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.weather.base_url, "http://localhost:9999/v1");
        assert_eq!(config.weather.timeout_seconds, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let path = write_temp_config("invalid", "[weather]\ntimeout_seconds = 900\n");
        let result = HeatRiskConfig::load_from_path(Some(&path));
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = env::temp_dir().join("heatrisk-does-not-exist.toml");
        assert!(HeatRiskConfig::load_from_path(Some(&path)).is_err());
    }

    #[test]
    fn test_environment_variable_override() {
        // SAFETY: Test environment, only this test reads server.host
        unsafe {
            env::set_var("HEATRISK_SERVER__HOST", "0.0.0.0");
        }

        let path = write_temp_config("env", "");
        let result = HeatRiskConfig::load_from_path(Some(&path));
        fs::remove_file(&path).ok();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("HEATRISK_SERVER__HOST");
        }

        assert_eq!(result.unwrap().server.host, "0.0.0.0");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = HeatRiskConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("heatrisk"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
