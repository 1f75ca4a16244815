//! Error types for forecast lookups.

use thiserror::Error;

/// Errors that can occur while fetching or preparing a forecast.
///
/// Everything except [`ForecastError::Config`] is confined to the lookup
/// path and ends up rendered as a localized user-facing string by
/// [`crate::format::render_error`]; nothing escapes the lookup service.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The provider rejected the API key.
    #[error("provider rejected the API key")]
    Auth,

    /// The provider could not resolve the requested city.
    #[error("city not found: {city}")]
    CityNotFound { city: String },

    /// Any other non-success provider response.
    #[error("provider returned status {status}")]
    Api { status: u16 },

    /// Transport-level failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// Catch-all for payload parsing and aggregation failures.
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// Invalid configuration; raised at construction time, never during
    /// a lookup.
    #[error("invalid configuration: {0}")]
    Config(String),
}
