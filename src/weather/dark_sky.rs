//! Dark Sky forecast API client
//!
//! Forecasts are requested with `Accept-Encoding: gzip`; the compressed JSON
//! body is inflated by the HTTP client before parsing.

use super::ForecastFetcher;
use crate::config::WeatherConfig;
use crate::models::{Coordinates, ForecastDocument};
use crate::{Result, SkillError};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Blocking client for the Dark Sky forecast endpoint
pub struct DarkSkyClient {
    client: Client,
    base_url: String,
    secret: String,
    units: String,
    exclude: String,
}

impl DarkSkyClient {
    /// Create a new client authenticated with the given secret key
    pub fn new(config: &WeatherConfig, secret: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("weather-skill/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(|e| SkillError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret,
            units: config.units.clone(),
            exclude: config.exclude.clone(),
        })
    }

    fn forecast_url(&self, coordinates: Coordinates) -> String {
        format!("{}/forecast/{}/{coordinates}", self.base_url, self.secret)
    }
}

impl ForecastFetcher for DarkSkyClient {
    #[instrument(name = "fetch_forecast", skip(self), fields(%coordinates))]
    fn fetch(&self, coordinates: Coordinates) -> Result<ForecastDocument> {
        debug!(
            "Dark Sky request URL: {}/forecast/<secret>/{}",
            self.base_url, coordinates
        );
        let start_time = Instant::now();

        let response = self
            .client
            .get(self.forecast_url(coordinates))
            .query(&[("units", self.units.as_str()), ("exclude", self.exclude.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Dark Sky answered with status {}", status);
            return Err(SkillError::api(format!("Weather API returned status {status}")));
        }

        let body = response.text()?;
        let forecast = ForecastDocument::from_json(&body)?;

        info!(
            "Fetched forecast in {} ms",
            start_time.elapsed().as_millis()
        );
        Ok(forecast)
    }
}
