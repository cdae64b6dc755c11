use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// City search settings
    #[serde(default)]
    pub cities: CitiesConfig,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// City search source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesConfig {
    /// Base URL for the city records API
    #[serde(default = "default_cities_base_url")]
    pub base_url: String,

    /// Page size for infinite-scroll batches
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_cities_base_url() -> String {
    "https://public.opendatasoft.com".to_string()
}

fn default_page_size() -> u32 {
    50
}

impl Default for CitiesConfig {
    fn default() -> Self {
        Self {
            base_url: default_cities_base_url(),
            page_size: default_page_size(),
        }
    }
}

/// Weather source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (optional here, can also be set via STRATUS_WEATHER_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Reads `config.toml` from the platform config directory; missing
    /// file falls back to defaults.
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("stratus");

        Self::load_from(&config_dir)
    }

    /// Load configuration rooted at an explicit directory (used by tests).
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            Self {
                config_dir: config_dir.to_path_buf(),
                cities: file.cities.unwrap_or_default(),
                weather: file.weather.unwrap_or_default(),
            }
        } else {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            Self {
                config_dir: config_dir.to_path_buf(),
                cities: CitiesConfig::default(),
                weather: WeatherConfig::default(),
            }
        };

        // Environment override keeps the key out of the config file
        if let Ok(key) = std::env::var("STRATUS_WEATHER_API_KEY") {
            if !key.is_empty() {
                config.weather.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if Url::parse(&self.cities.base_url).is_err() {
            result.add_error("cities.base_url", "not a valid URL");
        }
        if Url::parse(&self.weather.base_url).is_err() {
            result.add_error("weather.base_url", "not a valid URL");
        }
        if self.cities.page_size == 0 {
            result.add_error("cities.page_size", "must be at least 1");
        }
        if self.weather.api_key.as_deref().unwrap_or("").is_empty() {
            result.add_warning(
                "weather.api_key",
                "no API key set; weather lookups will fail",
            );
        }

        result
    }

    /// Path of the dashboard storage slot.
    pub fn dashboard_path(&self) -> PathBuf {
        self.config_dir.join("dashboard_cities.json")
    }
}

/// On-disk shape of `config.toml` (all sections optional).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    cities: Option<CitiesConfig>,
    weather: Option<WeatherConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(dir.path()).expect("load");
        assert_eq!(config.cities.page_size, 50);
        assert!(config.cities.base_url.contains("opendatasoft"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
[cities]
base_url = "https://records.example.com"
page_size = 25

[weather]
base_url = "https://weather.example.com"
api_key = "abc123"
"#,
        )
        .expect("write config");

        let config = Config::load_from(dir.path()).expect("load");
        assert_eq!(config.cities.base_url, "https://records.example.com");
        assert_eq!(config.cities.page_size, 25);
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_validation_flags_bad_url() {
        let mut config = Config {
            config_dir: PathBuf::from("/tmp"),
            cities: CitiesConfig::default(),
            weather: WeatherConfig::default(),
        };
        config.cities.base_url = "not a url".to_string();

        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("cities.base_url"));
    }

    #[test]
    fn test_missing_api_key_is_warning_not_error() {
        let config = Config {
            config_dir: PathBuf::from("/tmp"),
            cities: CitiesConfig::default(),
            weather: WeatherConfig::default(),
        };

        let result = config.validate();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }
}
