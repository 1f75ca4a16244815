//! Telegram Bot API HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BotConfig;
use crate::error::TelegramError;
use crate::types::{
    ApiResponse, GetUpdatesParams, Message, ReplyMarkup, SendMessageParams, Update, User,
};

/// Request timeout; must stay above the long-poll window of
/// [`GetUpdatesParams::timeout`].
const HTTP_TIMEOUT: Duration = Duration::from_secs(70);

/// Client for the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    config: BotConfig,
}

impl TelegramClient {
    /// Connect to the Bot API.
    ///
    /// Verifies the token with a `getMe` call before returning; an
    /// invalid credential fails here, not at the first send.
    pub async fn connect(config: BotConfig) -> Result<Self, TelegramError> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(TelegramError::Http)?;

        let client = Self { http, config };

        let me = client.get_me().await?;
        info!(
            "Connected to Telegram Bot API as @{}",
            me.username.as_deref().unwrap_or(&me.first_name)
        );

        Ok(client)
    }

    /// Get the bot's own account.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        let url = self.config.method_url("getMe");
        let envelope: ApiResponse<User> = self.http.get(&url).send().await?.json().await?;
        Self::into_result(envelope)
    }

    /// Fetch pending updates via long polling.
    ///
    /// Blocks for up to `params.timeout` seconds server-side when no
    /// updates are pending.
    pub async fn get_updates(&self, params: GetUpdatesParams) -> Result<Vec<Update>, TelegramError> {
        self.call("getUpdates", &params).await
    }

    /// Send a plain text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, TelegramError> {
        self.call("sendMessage", &SendMessageParams::text(chat_id, text))
            .await
    }

    /// Send a text message with reply markup (custom keyboard or
    /// keyboard removal) attached.
    pub async fn send_message_with_markup(
        &self,
        chat_id: i64,
        text: &str,
        markup: ReplyMarkup,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessageParams::with_markup(chat_id, text, markup),
        )
        .await
    }

    /// Call a Bot API method with JSON parameters.
    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, TelegramError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.method_url(method);
        debug!("Calling Bot API method {}", method);

        let envelope: ApiResponse<T> = self
            .http
            .post(&url)
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        Self::into_result(envelope)
    }

    fn into_result<T>(envelope: ApiResponse<T>) -> Result<T, TelegramError> {
        if envelope.ok {
            envelope
                .result
                .ok_or_else(|| TelegramError::Connection("response missing result".to_string()))
        } else {
            Err(TelegramError::Api {
                code: envelope.error_code.unwrap_or_default(),
                description: envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result_unwraps_payload() {
        let envelope = ApiResponse {
            ok: true,
            result: Some(7_i64),
            error_code: None,
            description: None,
        };
        assert_eq!(TelegramClient::into_result(envelope).unwrap(), 7);
    }

    #[test]
    fn test_into_result_maps_api_error() {
        let envelope: ApiResponse<i64> = ApiResponse {
            ok: false,
            result: None,
            error_code: Some(401),
            description: Some("Unauthorized".to_string()),
        };

        match TelegramClient::into_result(envelope) {
            Err(TelegramError::Api { code, description }) => {
                assert_eq!(code, 401);
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_result_rejects_missing_payload() {
        let envelope: ApiResponse<i64> = ApiResponse {
            ok: true,
            result: None,
            error_code: None,
            description: None,
        };
        assert!(matches!(
            TelegramClient::into_result(envelope),
            Err(TelegramError::Connection(_))
        ));
    }

    // Live Bot API test; needs TELEGRAM_BOT_TOKEN.
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_live_connect() {
        let _ = dotenvy::dotenv();
        let config = BotConfig::from_env().unwrap();
        let client = TelegramClient::connect(config).await.unwrap();
        let me = client.get_me().await.unwrap();
        assert!(me.is_bot);
    }
}
