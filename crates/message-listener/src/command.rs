//! Parsing of inbound message text into bot commands.

use forecast::Language;

/// Caption of the Ukrainian language-picker button.
pub const BUTTON_UKRAINIAN: &str = "Українська 🇺🇦";

/// Caption of the English language-picker button.
pub const BUTTON_ENGLISH: &str = "English 🇬🇧";

/// A parsed inbound command.
///
/// Anything that is not one of the known commands or button captions is
/// treated as a city name to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start` - greet the user.
    Start,
    /// `/help` - usage instructions.
    Help,
    /// `/language` - show the language picker.
    ChooseLanguage,
    /// A language-picker button press.
    SetLanguage(Language),
    /// Free text: a city to fetch the forecast for.
    Forecast(String),
}

impl Command {
    /// Parse message text into a command. Returns `None` for
    /// whitespace-only text.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match text {
            "/start" => Some(Command::Start),
            "/help" => Some(Command::Help),
            "/language" => Some(Command::ChooseLanguage),
            BUTTON_UKRAINIAN => Some(Command::SetLanguage(Language::Uk)),
            BUTTON_ENGLISH => Some(Command::SetLanguage(Language::En)),
            city => Some(Command::Forecast(city.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/language"), Some(Command::ChooseLanguage));
    }

    #[test]
    fn test_parse_button_captions() {
        assert_eq!(
            Command::parse("Українська 🇺🇦"),
            Some(Command::SetLanguage(Language::Uk))
        );
        assert_eq!(
            Command::parse("English 🇬🇧"),
            Some(Command::SetLanguage(Language::En))
        );
    }

    #[test]
    fn test_plain_text_is_a_city_lookup() {
        assert_eq!(
            Command::parse("Kyiv"),
            Some(Command::Forecast("Kyiv".to_string()))
        );
        assert_eq!(
            Command::parse("  New York  "),
            Some(Command::Forecast("New York".to_string()))
        );
    }

    #[test]
    fn test_unknown_slash_text_falls_through_to_lookup() {
        // Unknown commands behave like any other text, matching the
        // original bot's catch-all handler.
        assert_eq!(
            Command::parse("/weather"),
            Some(Command::Forecast("/weather".to_string()))
        );
    }

    #[test]
    fn test_blank_text_is_not_a_command() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }
}
