//! The forecast lookup service and its trait seam.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::aggregate::aggregate_daily;
use crate::client::WeatherClient;
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::format::{render_error, render_forecast};
use crate::locale::Language;

/// A source of forecast reply texts.
///
/// Implementations always produce a user-facing string; failures are
/// rendered, not raised. The message router is generic over this trait
/// so it can be exercised with a canned implementation in tests.
#[async_trait]
pub trait Forecaster: Send + Sync {
    /// Look up the forecast for a city and render it in the given language.
    async fn lookup(&self, city: &str, language: Language) -> String;
}

/// Forecast lookup backed by the weather provider.
#[derive(Debug, Clone)]
pub struct ForecastService {
    client: WeatherClient,
}

impl ForecastService {
    /// Create a service with the given configuration.
    ///
    /// Fails when the configuration carries no API key, so a
    /// misconfigured bot refuses to start.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        Ok(Self {
            client: WeatherClient::new(config)?,
        })
    }

    /// Create a service from environment variables.
    ///
    /// See [`ForecastConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, ForecastError> {
        Self::new(ForecastConfig::from_env()?)
    }

    async fn lookup_inner(&self, city: &str, language: Language) -> Result<String, ForecastError> {
        let response = self.client.fetch(city, language).await?;
        debug!(
            "Provider returned {} samples for '{}'",
            response.list.len(),
            city
        );

        let days = aggregate_daily(&response.list);
        Ok(render_forecast(&days, city, language))
    }
}

#[async_trait]
impl Forecaster for ForecastService {
    async fn lookup(&self, city: &str, language: Language) -> String {
        match self.lookup_inner(city, language).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Forecast lookup for '{}' failed: {}", city, e);
                render_error(&e, language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_for(url: &str) -> ForecastService {
        let config = ForecastConfig::with_api_url("test-key", url).unwrap();
        ForecastService::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_transport_failure_renders_network_error() {
        // Nothing listens here; the lookup must still return a string.
        let service = service_for("http://127.0.0.1:9/forecast");

        let reply = service.lookup("Kyiv", Language::En).await;
        assert!(reply.starts_with("Network error: "), "got: {}", reply);

        let reply = service.lookup("Київ", Language::Uk).await;
        assert!(reply.starts_with("Помилка мережі: "), "got: {}", reply);
    }

    // Live provider test; needs OPENWEATHER_API_KEY.
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_live_lookup() {
        let _ = dotenvy::dotenv();
        let service = ForecastService::from_env().unwrap();

        let reply = service.lookup("London", Language::En).await;
        assert!(reply.starts_with("🌤 Weather forecast for London:"));
    }
}
