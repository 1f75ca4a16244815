//! Telegram Bot API client library.
//!
//! This crate provides a Rust client for the Telegram Bot API over
//! HTTP. It supports:
//!
//! - Sending messages, with optional reply keyboards
//! - Receiving updates via long polling
//! - Token verification at connect time
//!
//! # Example
//!
//! ```no_run
//! use telegram_daemon::{BotConfig, TelegramClient};
//!
//! # async fn example() -> Result<(), telegram_daemon::TelegramError> {
//! // Connect to the Bot API
//! let config = BotConfig::new("123456:bot-token");
//! let client = TelegramClient::connect(config).await?;
//!
//! // Send a message
//! let sent = client.send_message(123456789, "Hello!").await?;
//! println!("Sent message {}", sent.message_id);
//!
//! // Subscribe to incoming updates
//! use futures::StreamExt;
//! let mut updates = std::pin::pin!(telegram_daemon::subscribe(&client));
//! while let Some(result) = updates.next().await {
//!     match result {
//!         Ok(update) => {
//!             if let Some(msg) = update.message {
//!                 println!("From {:?}: {:?}", msg.from, msg.text);
//!             }
//!         }
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod updates;

pub use client::TelegramClient;
pub use config::BotConfig;
pub use error::TelegramError;
pub use types::*;
pub use updates::{subscribe, subscribe_with_config, PollConfig};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
