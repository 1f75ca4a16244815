//! HTTP client for the weather provider.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::api_types::ForecastResponse;
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::locale::Language;

/// Client for the OpenWeatherMap forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: ForecastConfig,
}

impl WeatherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ForecastError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Fetch the raw forecast for a city.
    ///
    /// Units are fixed to metric; the language hint makes the provider
    /// localize sample descriptions.
    pub async fn fetch(
        &self,
        city: &str,
        language: Language,
    ) -> Result<ForecastResponse, ForecastError> {
        debug!("Fetching forecast for '{}' ({})", city, language);

        let response = self
            .http
            .get(&self.config.api_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
                ("lang", language.code()),
            ])
            .send()
            .await
            .map_err(|e| ForecastError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(ForecastError::Auth),
            StatusCode::NOT_FOUND => {
                return Err(ForecastError::CityNotFound {
                    city: city.to_string(),
                })
            }
            status if !status.is_success() => {
                return Err(ForecastError::Api {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| ForecastError::Unexpected(format!("failed to parse provider response: {}", e)))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }
}
