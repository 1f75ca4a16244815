//! Command routing for the Pohoda weather bot.
//!
//! This crate connects the Telegram update stream to the forecast
//! service and the user preference store: it parses inbound text into
//! commands, keeps the stored username fresh, resolves the reply
//! language, and sends the replies.
//!
//! # Example
//!
//! ```no_run
//! use database::Database;
//! use forecast::ForecastService;
//! use message_listener::{MessageProcessor, ProcessorConfig};
//! use telegram_daemon::{BotConfig, TelegramClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TelegramClient::connect(BotConfig::new("123:token")).await?;
//! let forecast = ForecastService::from_env()?;
//! let db = Database::connect("sqlite:pohoda.db?mode=rwc").await?;
//! db.migrate().await?;
//!
//! let processor = MessageProcessor::new(
//!     client,
//!     forecast,
//!     db,
//!     ProcessorConfig::with_wait_notice(),
//! );
//! processor.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod processor;
pub mod replies;

pub use command::{Command, BUTTON_ENGLISH, BUTTON_UKRAINIAN};
pub use processor::{
    language_keyboard, MessageProcessor, ProcessResult, ProcessorConfig, ProcessorError,
};
pub use replies::{reply_texts, ReplyTexts};

// Re-export the trait seam for convenience
pub use forecast::{Forecaster, Language};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
