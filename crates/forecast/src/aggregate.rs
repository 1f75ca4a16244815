//! Aggregation of provider samples into per-day summaries.

use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use tracing::warn;

use crate::api_types::ForecastEntry;

/// Summary of one calendar day built from the day's samples.
///
/// Min/max temperatures fold across every sample of the day; the
/// description, humidity and wind speed are frozen from the first
/// sample seen for that day. Later same-day conditions intentionally
/// do not update the descriptive fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    /// Lowest `temp_min` across the day's samples, °C.
    pub temp_min: f64,
    /// Highest `temp_max` across the day's samples, °C.
    pub temp_max: f64,
    /// Description from the day's first sample.
    pub description: String,
    /// Humidity from the day's first sample, percent.
    pub humidity: u8,
    /// Wind speed from the day's first sample, m/s.
    pub wind_speed: f64,
}

/// Fold an ordered sample sequence into one aggregate per calendar day.
///
/// Days keep the order in which they first appear in the input, which
/// for a well-formed provider response is chronological. Timestamps are
/// truncated to dates in UTC. An empty input yields an empty map.
pub fn aggregate_daily(entries: &[ForecastEntry]) -> IndexMap<NaiveDate, DailyAggregate> {
    let mut days: IndexMap<NaiveDate, DailyAggregate> = IndexMap::new();

    for entry in entries {
        let Some(timestamp) = DateTime::from_timestamp(entry.dt, 0) else {
            warn!("Skipping sample with unrepresentable timestamp {}", entry.dt);
            continue;
        };
        let date = timestamp.date_naive();

        let day = days.entry(date).or_insert_with(|| DailyAggregate {
            temp_min: f64::INFINITY,
            temp_max: f64::NEG_INFINITY,
            description: entry
                .weather
                .first()
                .map(|condition| condition.description.clone())
                .unwrap_or_default(),
            humidity: entry.main.humidity,
            wind_speed: entry.wind.speed,
        });

        day.temp_min = day.temp_min.min(entry.main.temp_min);
        day.temp_max = day.temp_max.max(entry.main.temp_max);
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_types::{MainReadings, WeatherCondition, Wind};

    fn entry(dt: i64, temp_min: f64, temp_max: f64, description: &str) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: MainReadings {
                temp_min,
                temp_max,
                humidity: 50,
            },
            weather: vec![WeatherCondition {
                description: description.to_string(),
            }],
            wind: Wind { speed: 3.0 },
        }
    }

    // 2024-06-01 00:00:00 UTC
    const JUNE_FIRST: i64 = 1717200000;
    const DAY: i64 = 86_400;

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_single_day_extrema() {
        let entries = vec![
            entry(JUNE_FIRST, 12.0, 17.0, "light rain"),
            entry(JUNE_FIRST + 3 * 3600, 10.5, 19.0, "overcast clouds"),
            entry(JUNE_FIRST + 6 * 3600, 11.0, 21.5, "clear sky"),
        ];

        let days = aggregate_daily(&entries);
        assert_eq!(days.len(), 1);

        let day = &days[0];
        assert_eq!(day.temp_min, 10.5);
        assert_eq!(day.temp_max, 21.5);
        // Descriptive fields come from the first sample only
        assert_eq!(day.description, "light rain");
        assert_eq!(day.humidity, 50);
        assert_eq!(day.wind_speed, 3.0);
    }

    #[test]
    fn test_first_sample_wins_descriptive_fields() {
        let mut first = entry(JUNE_FIRST, 10.0, 15.0, "mist");
        first.main.humidity = 91;
        first.wind.speed = 1.2;
        let mut second = entry(JUNE_FIRST + 3600, 9.0, 16.0, "clear sky");
        second.main.humidity = 40;
        second.wind.speed = 7.7;

        let days = aggregate_daily(&[first, second]);
        let day = &days[0];
        assert_eq!(day.description, "mist");
        assert_eq!(day.humidity, 91);
        assert_eq!(day.wind_speed, 1.2);
        assert_eq!(day.temp_min, 9.0);
        assert_eq!(day.temp_max, 16.0);
    }

    #[test]
    fn test_days_keep_first_appearance_order() {
        // Second calendar day appears first in the input
        let entries = vec![
            entry(JUNE_FIRST + DAY, 8.0, 14.0, "rain"),
            entry(JUNE_FIRST, 12.0, 18.0, "sun"),
            entry(JUNE_FIRST + DAY + 3600, 7.0, 15.0, "rain"),
        ];

        let days = aggregate_daily(&entries);
        let dates: Vec<_> = days.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_missing_weather_entry_leaves_description_empty() {
        let mut sample = entry(JUNE_FIRST, 5.0, 6.0, "");
        sample.weather.clear();

        let days = aggregate_daily(&[sample]);
        assert_eq!(days[0].description, "");
    }
}
