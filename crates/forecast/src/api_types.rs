//! Provider response types for the OpenWeatherMap forecast endpoint.

use serde::{Deserialize, Serialize};

/// Successful forecast response body.
///
/// The provider returns a flat list of samples, typically one every
/// three hours over five days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Timestamped forecast samples, in provider order.
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One timestamped forecast sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the sample window.
    pub dt: i64,

    /// Temperature and humidity readings.
    pub main: MainReadings,

    /// Weather conditions; the provider sends at most a handful, the
    /// first entry is the primary one.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,

    /// Wind readings.
    #[serde(default)]
    pub wind: Wind,
}

/// Temperature and humidity block of a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    /// Minimum temperature within the sample window, °C.
    pub temp_min: f64,
    /// Maximum temperature within the sample window, °C.
    pub temp_max: f64,
    /// Relative humidity, percent.
    #[serde(default)]
    pub humidity: u8,
}

/// One weather condition entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// One-line description, already localized by the provider.
    #[serde(default)]
    pub description: String,
}

/// Wind block of a sample.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed, m/s.
    #[serde(default)]
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_sample() {
        let json = r#"{
            "list": [
                {
                    "dt": 1717243200,
                    "main": {"temp": 18.2, "temp_min": 16.1, "temp_max": 19.4, "humidity": 62},
                    "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
                    "wind": {"speed": 3.6, "deg": 210}
                }
            ]
        }"#;

        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.list.len(), 1);

        let entry = &response.list[0];
        assert_eq!(entry.dt, 1717243200);
        assert_eq!(entry.main.temp_min, 16.1);
        assert_eq!(entry.main.humidity, 62);
        assert_eq!(entry.weather[0].description, "light rain");
        assert_eq!(entry.wind.speed, 3.6);
    }

    #[test]
    fn test_missing_optional_blocks() {
        let json = r#"{
            "list": [
                {"dt": 0, "main": {"temp_min": 1.0, "temp_max": 2.0}}
            ]
        }"#;

        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let entry = &response.list[0];
        assert!(entry.weather.is_empty());
        assert_eq!(entry.wind.speed, 0.0);
        assert_eq!(entry.main.humidity, 0);
    }
}
