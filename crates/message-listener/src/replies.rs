//! Canned reply texts, one table per language.

use forecast::Language;

/// Fixed replies for one language.
pub struct ReplyTexts {
    /// Reply to `/start`.
    pub welcome: &'static str,
    /// Reply to `/help`.
    pub help: &'static str,
    /// Notice sent while a forecast is being fetched.
    pub wait: &'static str,
    /// Prompt shown with the language picker.
    pub choose_language: &'static str,
    /// Confirmation after the language changed, in the new language.
    pub language_set: &'static str,
}

static UK_TEXTS: ReplyTexts = ReplyTexts {
    welcome: "👋 Вітаю! Я бот прогнозу погоди.\n\nПросто напишіть назву міста, і я покажу вам прогноз погоди на тиждень.\nНаприклад: Київ, Львів, Одеса",
    help: "📖 Як користуватися ботом:\n\n1. Просто напишіть назву міста\n2. Отримайте детальний прогноз погоди на тиждень\n\nДоступні команди:\n/start - Почати роботу з ботом\n/help - Показати це повідомлення\n/language - Змінити мову",
    wait: "⏳ Отримую прогноз погоди...",
    choose_language: "Оберіть мову / Choose language:",
    language_set: "Мову змінено на українську 🇺🇦",
};

static EN_TEXTS: ReplyTexts = ReplyTexts {
    welcome: "👋 Hi! I'm a weather forecast bot.\n\nJust type the name of a city and I'll show you the weekly weather forecast.\nFor example: Kyiv, Lviv, Odesa",
    help: "📖 How to use the bot:\n\n1. Just type a city name\n2. Get a detailed weekly weather forecast\n\nAvailable commands:\n/start - Start using the bot\n/help - Show this message\n/language - Change language",
    wait: "⏳ Getting the weather forecast...",
    choose_language: "Оберіть мову / Choose language:",
    language_set: "Language set to English 🇬🇧",
};

/// Reply table for a language.
pub fn reply_texts(language: Language) -> &'static ReplyTexts {
    match language {
        Language::Uk => &UK_TEXTS,
        Language::En => &EN_TEXTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_set_confirmation_is_in_the_new_language() {
        assert!(reply_texts(Language::Uk).language_set.contains("українську"));
        assert!(reply_texts(Language::En).language_set.contains("English"));
    }

    #[test]
    fn test_chooser_prompt_is_bilingual() {
        // Shown before the user has necessarily picked a language
        assert_eq!(
            reply_texts(Language::Uk).choose_language,
            reply_texts(Language::En).choose_language
        );
    }
}
