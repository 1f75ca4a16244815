//! Configuration for the forecast service.

use std::env;
use std::fmt;

use crate::error::ForecastError;

/// Default OpenWeatherMap 5-day forecast endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Configuration for the weather provider client.
#[derive(Clone)]
pub struct ForecastConfig {
    /// Forecast endpoint URL.
    pub api_url: String,
    /// OpenWeatherMap API key.
    pub api_key: String,
}

impl ForecastConfig {
    /// Create a configuration with the default endpoint.
    ///
    /// Fails when the key is empty; a missing credential is a startup
    /// error, not a per-request one.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ForecastError> {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Create a configuration with a custom endpoint (e.g. a test server).
    pub fn with_api_url(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, ForecastError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ForecastError::Config(
                "weather provider API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_url: api_url.into(),
            api_key,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENWEATHER_API_KEY` - provider API key
    ///
    /// Optional environment variables:
    /// - `OPENWEATHER_API_URL` - forecast endpoint (default: [`DEFAULT_API_URL`])
    pub fn from_env() -> Result<Self, ForecastError> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| ForecastError::Config("OPENWEATHER_API_KEY not set".to_string()))?;

        let api_url =
            env::var("OPENWEATHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_api_url(api_key, api_url)
    }
}

impl fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .finish()
    }
}
