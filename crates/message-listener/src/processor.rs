//! Update processor connecting the Telegram client, the preference
//! store and the forecast service.

use database::{user, Database, DatabaseError};
use forecast::{Forecaster, Language};
use futures::StreamExt;
use telegram_daemon::{
    Message, PollConfig, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup, TelegramClient,
    TelegramError, Update, User,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::command::{Command, BUTTON_ENGLISH, BUTTON_UKRAINIAN};
use crate::replies::reply_texts;

/// Configuration for the message processor.
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// Long-polling configuration.
    pub poll: PollConfig,

    /// Whether to send a "getting the forecast..." notice before the
    /// provider call.
    pub send_wait_notice: bool,
}

impl ProcessorConfig {
    /// Default configuration with the wait notice enabled.
    pub fn with_wait_notice() -> Self {
        Self {
            send_wait_notice: true,
            ..Default::default()
        }
    }
}

/// Errors that can occur during update processing.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Error from the Telegram client.
    #[error("daemon error: {0}")]
    Daemon(#[from] TelegramError),

    /// Error from the preference store.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// The update stream ended unexpectedly.
    #[error("update stream ended")]
    StreamEnded,
}

/// Result of processing a single update.
#[derive(Debug)]
pub enum ProcessResult {
    /// Update was handled and a reply sent.
    Responded { chat_id: i64, message_id: i64 },
    /// Update was skipped (no message, no text, from a bot, ...).
    Skipped { reason: String },
    /// Error occurred during processing.
    Error(ProcessorError),
}

/// The two-button language picker keyboard.
pub fn language_keyboard() -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup::one_time(vec![vec![BUTTON_UKRAINIAN, BUTTON_ENGLISH]])
}

/// A processor that receives Telegram updates and routes them to the
/// forecast service and the preference store.
pub struct MessageProcessor<F: Forecaster> {
    client: TelegramClient,
    forecast: F,
    db: Database,
    config: ProcessorConfig,
}

impl<F: Forecaster> MessageProcessor<F> {
    /// Create a new message processor.
    pub fn new(client: TelegramClient, forecast: F, db: Database, config: ProcessorConfig) -> Self {
        Self {
            client,
            forecast,
            db,
            config,
        }
    }

    /// Create a processor with default configuration.
    pub fn with_defaults(client: TelegramClient, forecast: F, db: Database) -> Self {
        Self::new(client, forecast, db, ProcessorConfig::default())
    }

    /// Get a reference to the forecast backend.
    pub fn forecast(&self) -> &F {
        &self.forecast
    }

    /// Get a reference to the client.
    pub fn client(&self) -> &TelegramClient {
        &self.client
    }

    /// Check whether an update is something we answer: a text message
    /// from a human sender.
    fn should_process(update: &Update) -> Result<(&User, &Message, &str), String> {
        let message = update
            .message
            .as_ref()
            .ok_or_else(|| "no message".to_string())?;

        let from = message
            .from
            .as_ref()
            .ok_or_else(|| "no sender".to_string())?;

        if from.is_bot {
            return Err("message from a bot".to_string());
        }

        let text = message
            .text
            .as_deref()
            .ok_or_else(|| "no text content".to_string())?;

        Ok((from, message, text))
    }

    /// Process a single update and return the result.
    pub async fn process_update(&self, update: &Update) -> ProcessResult {
        let (from, message, text) = match Self::should_process(update) {
            Ok(parts) => parts,
            Err(reason) => {
                debug!("Skipping update {}: {}", update.update_id, reason);
                return ProcessResult::Skipped { reason };
            }
        };
        let chat_id = message.chat.id;

        // Every interaction refreshes the stored username; the language
        // is only touched by the picker below.
        if let Err(e) = user::upsert_user(self.db.pool(), from.id, from.username.as_deref(), None).await
        {
            return ProcessResult::Error(e.into());
        }

        let language = match user::get_language(self.db.pool(), from.id).await {
            Ok(code) => Language::from_code(&code).unwrap_or_default(),
            Err(e) => return ProcessResult::Error(e.into()),
        };

        let Some(command) = Command::parse(text) else {
            return ProcessResult::Skipped {
                reason: "blank message text".to_string(),
            };
        };

        info!("Processing message from {}: {}", from.id, text);

        let texts = reply_texts(language);
        let send_result = match &command {
            Command::Start => self.client.send_message(chat_id, texts.welcome).await,
            Command::Help => self.client.send_message(chat_id, texts.help).await,
            Command::ChooseLanguage => {
                self.client
                    .send_message_with_markup(
                        chat_id,
                        texts.choose_language,
                        ReplyMarkup::Keyboard(language_keyboard()),
                    )
                    .await
            }
            Command::SetLanguage(new_language) => {
                if let Err(e) =
                    user::set_language(self.db.pool(), from.id, new_language.code()).await
                {
                    return ProcessResult::Error(e.into());
                }
                if let Err(e) = user::upsert_user(
                    self.db.pool(),
                    from.id,
                    from.username.as_deref(),
                    Some(new_language.code()),
                )
                .await
                {
                    return ProcessResult::Error(e.into());
                }

                // Confirm in the language just picked, not the old one
                self.client
                    .send_message_with_markup(
                        chat_id,
                        reply_texts(*new_language).language_set,
                        ReplyMarkup::Remove(ReplyKeyboardRemove::new()),
                    )
                    .await
            }
            Command::Forecast(city) => {
                if self.config.send_wait_notice {
                    if let Err(e) = self.client.send_message(chat_id, texts.wait).await {
                        warn!("Failed to send wait notice to chat {}: {}", chat_id, e);
                    }
                }

                let reply = self.forecast.lookup(city, language).await;
                self.client.send_message(chat_id, &reply).await
            }
        };

        match send_result {
            Ok(sent) => ProcessResult::Responded {
                chat_id,
                message_id: sent.message_id,
            },
            Err(e) => {
                error!("Failed to send reply to chat {}: {}", chat_id, e);
                ProcessResult::Error(ProcessorError::Daemon(e))
            }
        }
    }

    /// Run the processor, handling updates until the stream ends.
    ///
    /// Per-update failures are logged and the loop continues; only the
    /// stream ending terminates the run.
    pub async fn run(self) -> Result<(), ProcessorError> {
        info!("Starting message processor");

        let stream = telegram_daemon::subscribe_with_config(&self.client, self.config.poll.clone());
        tokio::pin!(stream);

        while let Some(result) = stream.next().await {
            match result {
                Ok(update) => match self.process_update(&update).await {
                    ProcessResult::Responded {
                        chat_id,
                        message_id,
                    } => {
                        debug!("Responded to chat {} with message {}", chat_id, message_id);
                    }
                    ProcessResult::Skipped { reason } => {
                        debug!("Skipped: {}", reason);
                    }
                    ProcessResult::Error(e) => {
                        warn!("Error processing update: {}", e);
                    }
                },
                Err(e) => {
                    error!("Update stream error: {}", e);
                    // The stream keeps polling after errors
                }
            }
        }

        warn!("Update stream ended");
        Err(ProcessorError::StreamEnded)
    }

    /// Run the processor with graceful shutdown support.
    ///
    /// Runs until the provided shutdown future completes or the update
    /// stream ends.
    pub async fn run_with_shutdown<S>(self, shutdown_signal: S) -> Result<(), ProcessorError>
    where
        S: std::future::Future<Output = ()> + Send,
    {
        info!("Starting message processor (graceful shutdown enabled)");

        let stream = telegram_daemon::subscribe_with_config(&self.client, self.config.poll.clone());
        tokio::pin!(stream);
        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown_signal => {
                    info!("Shutdown signal received, stopping message processor");
                    return Ok(());
                }

                result = stream.next() => {
                    match result {
                        Some(Ok(update)) => {
                            if let ProcessResult::Error(e) = self.process_update(&update).await {
                                warn!("Error processing update: {}", e);
                            }
                        }
                        Some(Err(e)) => {
                            error!("Update stream error: {}", e);
                        }
                        None => {
                            warn!("Update stream ended");
                            return Err(ProcessorError::StreamEnded);
                        }
                    }
                }
            }
        }
    }
}
