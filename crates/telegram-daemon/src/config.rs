//! Configuration types for telegram-daemon.

use std::env;
use std::fmt;

use crate::error::TelegramError;

/// Default Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Configuration for connecting to the Telegram Bot API.
#[derive(Clone)]
pub struct BotConfig {
    /// Base URL of the Bot API server.
    pub api_url: String,
    /// Bot token issued by @BotFather.
    token: String,
}

impl BotConfig {
    /// Create a new configuration for the official Bot API server.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        }
    }

    /// Create a configuration for a custom Bot API server (e.g. a local
    /// bot-api instance or a test server).
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TELEGRAM_BOT_TOKEN` - bot token
    ///
    /// Optional environment variables:
    /// - `TELEGRAM_API_URL` - Bot API server (default: [`DEFAULT_API_URL`])
    pub fn from_env() -> Result<Self, TelegramError> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| TelegramError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        match env::var("TELEGRAM_API_URL") {
            Ok(api_url) => Ok(Self::with_api_url(token, api_url)),
            Err(_) => Ok(Self::new(token)),
        }
    }

    /// Get the URL for a Bot API method call.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("api_url", &self.api_url)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let config = BotConfig::new("123:abc");
        assert_eq!(
            config.method_url("getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );
    }

    #[test]
    fn test_custom_api_url() {
        let config = BotConfig::with_api_url("123:abc", "http://localhost:8081");
        assert_eq!(
            config.method_url("getUpdates"),
            "http://localhost:8081/bot123:abc/getUpdates"
        );
    }

    #[test]
    fn test_token_not_leaked_by_debug() {
        let config = BotConfig::new("123:secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
    }
}
