use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Current conditions for a city, metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure: u32,
    /// Free-text condition description (e.g. "light rain")
    pub description: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

/// One three-hour forecast slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    /// Probability of precipitation, 0..1
    pub precipitation_chance: f64,
}

/// Current conditions, forecast, and the scene selected for display.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastEntry>,
    pub scene: crate::scene::SceneAsset,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Weather API returned status {0}")]
    Api(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<WeatherError> for stratus_core::AppError {
    fn from(e: WeatherError) -> Self {
        use stratus_core::error::ReqwestErrorExt;
        use stratus_core::{AppError, ConfigError, NetworkError};

        match e {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::CityNotFound(city) => {
                AppError::Service(format!("No weather data for city: {}", city))
            }
            WeatherError::InvalidApiKey => {
                AppError::Config(ConfigError::MissingSetting("weather.api_key".into()))
            }
            WeatherError::Api(status) => AppError::Network(NetworkError::ServerError {
                status,
                message: "weather lookup failed".into(),
            }),
            WeatherError::Parse(msg) => {
                AppError::Network(NetworkError::InvalidResponse(msg))
            }
        }
    }
}
