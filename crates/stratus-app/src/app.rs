use stratus_cities::{BrowseSession, CitySearchClient};
use stratus_core::{AppError, Config};
use stratus_dashboard::{Dashboard, JsonFileStore};
use stratus_weather::WeatherClient;

/// Composed application services.
///
/// The weather client is only built when an API key is configured; the
/// city browser and dashboard work without one.
#[derive(Debug)]
pub struct App {
    config: Config,
    browser: BrowseSession,
    weather: Option<WeatherClient>,
    dashboard: Dashboard<JsonFileStore>,
}

impl App {
    /// Build all services from configuration.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let cities = CitySearchClient::new(&config.cities.base_url)?
            .with_page_size(config.cities.page_size);

        let weather = match config.weather.api_key.as_deref() {
            Some(key) => Some(WeatherClient::new(&config.weather.base_url, key)?),
            None => {
                tracing::warn!("No weather API key configured; weather lookups disabled");
                None
            }
        };

        let dashboard = Dashboard::open(JsonFileStore::new(config.dashboard_path()));

        Ok(Self {
            config,
            browser: BrowseSession::new(cities),
            weather,
            dashboard,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn browser(&self) -> &BrowseSession {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut BrowseSession {
        &mut self.browser
    }

    pub fn weather(&self) -> Option<&WeatherClient> {
        self.weather.as_ref()
    }

    pub fn dashboard(&self) -> &Dashboard<JsonFileStore> {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard<JsonFileStore> {
        &mut self.dashboard
    }
}
