//! Localized rendering of forecasts and errors.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::aggregate::DailyAggregate;
use crate::error::ForecastError;
use crate::locale::{self, Language};

/// Render a forecast as the reply text sent to the user.
///
/// Emits the title line, then one block per day in the map's iteration
/// order. An empty map renders the title alone.
pub fn render_forecast(
    days: &IndexMap<NaiveDate, DailyAggregate>,
    city: &str,
    language: Language,
) -> String {
    let labels = locale::labels(language);

    let mut out = labels.title.replace("{city}", city);
    out.push_str("\n\n");

    for (date, day) in days {
        let date_line = date.format(labels.date_format).to_string();
        out.push_str(&labels.date.replace("{date}", &date_line));
        out.push('\n');
        out.push_str(
            &labels
                .temp
                .replace("{min}", &format!("{:.1}", day.temp_min))
                .replace("{max}", &format!("{:.1}", day.temp_max)),
        );
        out.push('\n');
        out.push_str(&labels.description.replace("{desc}", &capitalize(&day.description)));
        out.push('\n');
        out.push_str(&labels.humidity.replace("{humidity}", &day.humidity.to_string()));
        out.push('\n');
        out.push_str(&labels.wind.replace("{wind}", &day.wind_speed.to_string()));
        out.push_str("\n\n");
    }

    out
}

/// Render a lookup failure as the reply text sent to the user.
pub fn render_error(error: &ForecastError, language: Language) -> String {
    let texts = locale::error_texts(language);

    match error {
        ForecastError::Auth => texts.auth.to_string(),
        ForecastError::CityNotFound { city } => texts.not_found.replace("{city}", city),
        ForecastError::Api { .. } => texts.api.to_string(),
        ForecastError::Network(err) => texts.network.replace("{err}", err),
        ForecastError::Unexpected(err) => texts.unexpected.replace("{err}", err),
        // Config errors abort startup and never reach a chat, but render
        // something sensible anyway.
        ForecastError::Config(err) => texts.unexpected.replace("{err}", err),
    }
}

/// Uppercase the first letter, leaving the rest untouched.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_day() -> IndexMap<NaiveDate, DailyAggregate> {
        let mut days = IndexMap::new();
        days.insert(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            DailyAggregate {
                temp_min: 10.5,
                temp_max: 21.0,
                description: "light rain".to_string(),
                humidity: 62,
                wind_speed: 3.6,
            },
        );
        days
    }

    #[test]
    fn test_render_forecast_english() {
        let text = render_forecast(&one_day(), "Kyiv", Language::En);

        assert!(text.starts_with("🌤 Weather forecast for Kyiv:\n\n"));
        assert!(text.contains("📅 June 01, 2024:"));
        assert!(text.contains("🌡 Temperature: 10.5°C - 21.0°C"));
        assert!(text.contains("☁️ Light rain"));
        assert!(text.contains("💧 Humidity: 62%"));
        assert!(text.contains("💨 Wind speed: 3.6 m/s"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_render_forecast_ukrainian() {
        let mut days = one_day();
        days[0].description = "невеликий дощ".to_string();
        let text = render_forecast(&days, "Київ", Language::Uk);

        assert!(text.starts_with("🌤 Прогноз погоди для міста Київ:\n\n"));
        assert!(text.contains("📅 01.06.2024:"));
        assert!(text.contains("🌡 Температура: 10.5°C - 21.0°C"));
        assert!(text.contains("☁️ Невеликий дощ"));
        assert!(text.contains("💧 Вологість: 62%"));
        assert!(text.contains("💨 Швидкість вітру: 3.6 м/с"));
    }

    #[test]
    fn test_render_empty_forecast_is_title_only() {
        let days = IndexMap::new();
        assert_eq!(
            render_forecast(&days, "Kyiv", Language::En),
            "🌤 Weather forecast for Kyiv:\n\n"
        );
    }

    #[test]
    fn test_blocks_follow_map_order() {
        let mut days = one_day();
        // Earlier calendar date inserted second
        days.insert(
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            DailyAggregate {
                temp_min: 9.0,
                temp_max: 15.0,
                description: "clear sky".to_string(),
                humidity: 40,
                wind_speed: 2.0,
            },
        );

        let text = render_forecast(&days, "Kyiv", Language::En);
        let first = text.find("June 01, 2024").unwrap();
        let second = text.find("May 31, 2024").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_not_found_error_both_languages() {
        let error = ForecastError::CityNotFound {
            city: "Atlantis".to_string(),
        };

        assert_eq!(
            render_error(&error, Language::En),
            "City 'Atlantis' not found. Please check the spelling."
        );
        assert_eq!(
            render_error(&error, Language::Uk),
            "Місто 'Atlantis' не знайдено. Перевірте правильність написання."
        );
    }

    #[test]
    fn test_network_error_embeds_transport_text() {
        let error = ForecastError::Network("connection refused".to_string());

        assert_eq!(
            render_error(&error, Language::En),
            "Network error: connection refused"
        );
        assert_eq!(
            render_error(&error, Language::Uk),
            "Помилка мережі: connection refused"
        );
    }

    #[test]
    fn test_auth_and_api_errors_are_fixed_strings() {
        assert_eq!(
            render_error(&ForecastError::Auth, Language::En),
            "API authentication error. Check your API key."
        );
        assert_eq!(
            render_error(&ForecastError::Api { status: 500 }, Language::En),
            "Error getting weather forecast. Please try again later."
        );
    }

    #[test]
    fn test_capitalize_is_unicode_aware() {
        assert_eq!(capitalize("хмарно"), "Хмарно");
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize(""), "");
    }
}
