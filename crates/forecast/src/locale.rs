//! Supported reply languages and their string tables.
//!
//! All user-visible text lives here as fixed templates with `{...}`
//! placeholders, one table per language. Supporting another language
//! means adding a [`Language`] variant and its two tables; the
//! aggregation and formatting code never changes.

use serde::{Deserialize, Serialize};

/// A reply language supported by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Ukrainian.
    Uk,
    /// English.
    En,
}

impl Language {
    /// Two-letter code as stored in the database and sent to the provider.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }

    /// Parse a stored language code. Returns `None` for anything
    /// unrecognized; callers fall back to the default.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "uk" => Some(Language::Uk),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Uk
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Templates for one language's forecast rendering.
pub struct Labels {
    /// Title line; `{city}` placeholder.
    pub title: &'static str,
    /// Date line; `{date}` placeholder.
    pub date: &'static str,
    /// Temperature range line; `{min}` and `{max}` placeholders.
    pub temp: &'static str,
    /// Description line; `{desc}` placeholder.
    pub description: &'static str,
    /// Humidity line; `{humidity}` placeholder.
    pub humidity: &'static str,
    /// Wind speed line; `{wind}` placeholder.
    pub wind: &'static str,
    /// `chrono` format string for the date line.
    pub date_format: &'static str,
}

/// Templates for one language's error rendering.
pub struct ErrorTexts {
    /// Provider rejected the API key; no interpolation.
    pub auth: &'static str,
    /// City unknown to the provider; `{city}` placeholder.
    pub not_found: &'static str,
    /// Any other provider failure; no interpolation.
    pub api: &'static str,
    /// Transport failure; `{err}` placeholder.
    pub network: &'static str,
    /// Catch-all; `{err}` placeholder.
    pub unexpected: &'static str,
}

static UK_LABELS: Labels = Labels {
    title: "🌤 Прогноз погоди для міста {city}:",
    date: "📅 {date}:",
    temp: "🌡 Температура: {min}°C - {max}°C",
    description: "☁️ {desc}",
    humidity: "💧 Вологість: {humidity}%",
    wind: "💨 Швидкість вітру: {wind} м/с",
    date_format: "%d.%m.%Y",
};

static EN_LABELS: Labels = Labels {
    title: "🌤 Weather forecast for {city}:",
    date: "📅 {date}:",
    temp: "🌡 Temperature: {min}°C - {max}°C",
    description: "☁️ {desc}",
    humidity: "💧 Humidity: {humidity}%",
    wind: "💨 Wind speed: {wind} m/s",
    date_format: "%B %d, %Y",
};

static UK_ERRORS: ErrorTexts = ErrorTexts {
    auth: "Помилка автентифікації API. Перевірте ваш API ключ.",
    not_found: "Місто '{city}' не знайдено. Перевірте правильність написання.",
    api: "Помилка при отриманні прогнозу погоди. Спробуйте пізніше.",
    network: "Помилка мережі: {err}",
    unexpected: "Сталася помилка: {err}",
};

static EN_ERRORS: ErrorTexts = ErrorTexts {
    auth: "API authentication error. Check your API key.",
    not_found: "City '{city}' not found. Please check the spelling.",
    api: "Error getting weather forecast. Please try again later.",
    network: "Network error: {err}",
    unexpected: "An error occurred: {err}",
};

/// Forecast templates for a language.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Uk => &UK_LABELS,
        Language::En => &EN_LABELS,
    }
}

/// Error templates for a language.
pub fn error_texts(language: Language) -> &'static ErrorTexts {
    match language {
        Language::Uk => &UK_ERRORS,
        Language::En => &EN_ERRORS,
    }
}
