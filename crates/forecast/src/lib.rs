//! Weather forecast lookup for the Pohoda bot.
//!
//! This crate owns the whole forecast path: one HTTP call to the
//! OpenWeatherMap 5-day endpoint, aggregation of the 3-hourly samples
//! into per-day summaries, and localized rendering of both forecasts
//! and failures.
//!
//! The visible contract of [`ForecastService::lookup`] is that it
//! always returns a reply string. Provider rejections, network
//! failures and malformed payloads are rendered through the same
//! per-language template tables as the forecast itself.
//!
//! # Example
//!
//! ```no_run
//! use forecast::{ForecastConfig, ForecastService, Forecaster, Language};
//!
//! # async fn example() -> Result<(), forecast::ForecastError> {
//! let config = ForecastConfig::new("my-api-key")?;
//! let service = ForecastService::new(config)?;
//!
//! let reply = service.lookup("Kyiv", Language::Uk).await;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod api_types;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod service;

pub use aggregate::{aggregate_daily, DailyAggregate};
pub use api_types::{ForecastEntry, ForecastResponse};
pub use client::WeatherClient;
pub use config::ForecastConfig;
pub use error::ForecastError;
pub use format::{render_error, render_forecast};
pub use locale::Language;
pub use service::{ForecastService, Forecaster};

// Re-export async_trait for downstream Forecaster implementations
pub use async_trait::async_trait;
