//! HTTP client for the weather source (OpenWeatherMap-style API).

use crate::scene::SceneAsset;
use crate::types::{CurrentConditions, ForecastEntry, WeatherError, WeatherReport};
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire shape of the current-conditions endpoint.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: MainFields,
    #[serde(default)]
    weather: Vec<DescriptionField>,
    wind: WindField,
}

#[derive(Debug, Deserialize)]
struct MainFields {
    temp: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct DescriptionField {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindField {
    speed: f64,
}

/// Wire shape of the forecast endpoint.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastSlot>,
}

#[derive(Debug, Deserialize)]
struct ForecastSlot {
    dt_txt: String,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<DescriptionField>,
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp_min: f64,
    temp_max: f64,
}

/// Client for the city-keyed weather source.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: Url,
    client: Arc<Client>,
    api_key: String,
}

impl WeatherClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base_url).map_err(|e| WeatherError::Parse(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions for a city, metric units.
    pub async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let url = self.endpoint(CURRENT_PATH)?;

        tracing::debug!(city, "Fetching current conditions");

        let response = self
            .client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        Self::check_status(response.status(), city)?;
        let body: CurrentResponse = response.json().await?;

        Ok(CurrentConditions {
            temperature: body.main.temp,
            humidity: body.main.humidity,
            pressure: body.main.pressure,
            // A missing description block falls through to the default
            // scene downstream.
            description: body
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
            wind_speed: body.wind.speed,
        })
    }

    /// Fetch the multi-day forecast for a city, metric units.
    ///
    /// Slots with unparseable timestamps are skipped with a debug log.
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let url = self.endpoint(FORECAST_PATH)?;

        tracing::debug!(city, "Fetching forecast");

        let response = self
            .client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        Self::check_status(response.status(), city)?;
        let body: ForecastResponse = response.json().await?;

        let entries = body
            .list
            .into_iter()
            .filter_map(|slot| {
                let timestamp = match NaiveDateTime::parse_from_str(&slot.dt_txt, DT_FORMAT) {
                    Ok(ts) => ts,
                    Err(e) => {
                        tracing::debug!(dt_txt = %slot.dt_txt, error = %e, "Skipping forecast slot");
                        return None;
                    }
                };
                Some(ForecastEntry {
                    timestamp,
                    temp_min: slot.main.temp_min,
                    temp_max: slot.main.temp_max,
                    description: slot
                        .weather
                        .into_iter()
                        .next()
                        .map(|w| w.description)
                        .unwrap_or_default(),
                    precipitation_chance: slot.pop,
                })
            })
            .collect();

        Ok(entries)
    }

    /// Fetch everything the forecast screen needs in one call: current
    /// conditions, forecast, and the scene selected from the current
    /// description.
    pub async fn report(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let current = self.current(city).await?;
        let forecast = self.forecast(city).await?;
        let scene = SceneAsset::from_description(&current.description);

        Ok(WeatherReport {
            current,
            forecast,
            scene,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, WeatherError> {
        self.base_url
            .join(path)
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }

    fn check_status(status: StatusCode, city: &str) -> Result<(), WeatherError> {
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            404 => Err(WeatherError::CityNotFound(city.to_string())),
            401 => Err(WeatherError::InvalidApiKey),
            code => Err(WeatherError::Api(code)),
        }
    }
}
