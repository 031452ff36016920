//! Configuration management for the `EventAI` engine
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::EventAiError;
use crate::query::RecommendationLimits;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `EventAI` engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAiConfig {
    /// Catalog data source configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Search and recommendation settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Catalog data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file
    #[serde(default = "default_catalog_file")]
    pub data_file: String,
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

/// Search and recommendation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of venues returned by a recommendation
    #[serde(default = "default_max_venues")]
    pub max_venues: usize,
    /// Maximum number of vendors returned per category
    #[serde(default = "default_max_vendors_per_type")]
    pub max_vendors_per_type: usize,
}

// Default value functions
fn default_catalog_file() -> String {
    "event_data.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_max_venues() -> usize {
    5
}

fn default_max_vendors_per_type() -> usize {
    3
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_catalog_file(),
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

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_venues: default_max_venues(),
            max_vendors_per_type: default_max_vendors_per_type(),
        }
    }
}

impl Default for EventAiConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Recommendation limits derived from this configuration
    #[must_use]
    pub fn limits(&self) -> RecommendationLimits {
        RecommendationLimits {
            max_venues: self.max_venues,
            max_vendors_per_type: self.max_vendors_per_type,
        }
    }
}

impl EventAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with EVENTAI_ prefix.
        // Keys with underscores need a double-underscore section separator,
        // e.g. EVENTAI_SEARCH__MAX_VENUES or EVENTAI_CATALOG__DATA_FILE.
        builder = builder.add_source(
            Environment::with_prefix("EVENTAI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: EventAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "eventai").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.data_file.is_empty() {
            self.catalog.data_file = default_catalog_file();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.search.max_venues == 0 {
            self.search.max_venues = default_max_venues();
        }
        if self.search.max_vendors_per_type == 0 {
            self.search.max_vendors_per_type = default_max_vendors_per_type();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(EventAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(EventAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.search.max_venues > 100 {
            return Err(EventAiError::config("Maximum venues cannot exceed 100").into());
        }

        if self.search.max_vendors_per_type > 100 {
            return Err(
                EventAiError::config("Maximum vendors per category cannot exceed 100").into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EventAiConfig::default();
        assert_eq!(config.catalog.data_file, "event_data.json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.search.max_venues, 5);
        assert_eq!(config.search.max_vendors_per_type, 3);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = EventAiConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        // A fresh machine has no config file and no EVENTAI_ variables;
        // loading must still succeed with the built-in defaults.
        let config = EventAiConfig::load_from_path(Some(PathBuf::from(
            "/nonexistent/eventai/config.toml",
        )))
        .expect("loading with no config file must fall back to defaults");
        assert_eq!(config.catalog.data_file, "event_data.json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_environment_variable_override() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            std::env::set_var("EVENTAI_SEARCH__MAX_VENUES", "7");
        }

        let config = EventAiConfig::load_from_path(Some(PathBuf::from(
            "/nonexistent/eventai/config.toml",
        )));

        // SAFETY: Test cleanup
        unsafe {
            std::env::remove_var("EVENTAI_SEARCH__MAX_VENUES");
        }

        let config = config.expect("environment-only load must succeed");
        assert_eq!(config.search.max_venues, 7);
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = EventAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_limits() {
        let mut config = EventAiConfig::default();
        config.search.max_venues = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut config = EventAiConfig::default();
        config.logging.level = String::new();
        config.search.max_venues = 0;
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.search.max_venues, 5);
    }

    #[test]
    fn test_search_limits_conversion() {
        let config = EventAiConfig::default();
        let limits = config.search.limits();
        assert_eq!(limits.max_venues, 5);
        assert_eq!(limits.max_vendors_per_type, 3);
    }

    #[test]
    fn test_config_path_generation() {
        let path = EventAiConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("eventai"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
