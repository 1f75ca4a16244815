//! Bot API request and response types.
//!
//! Only the subset of the Bot API surface the bot actually uses is
//! modeled; unknown fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,

    /// Payload, present when `ok` is true.
    #[serde(default = "Option::default")]
    pub result: Option<T>,

    /// Error code, present when `ok` is false.
    #[serde(default)]
    pub error_code: Option<i64>,

    /// Human-readable error description, present when `ok` is false.
    #[serde(default)]
    pub description: Option<String>,
}

/// An incoming update from long polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier.
    pub update_id: i64,

    /// New incoming message, if this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// A Telegram message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier within the chat.
    pub message_id: i64,

    /// Sender; absent for channel posts.
    #[serde(default)]
    pub from: Option<User>,

    /// Chat the message belongs to.
    pub chat: Chat,

    /// Unix time the message was sent.
    #[serde(default)]
    pub date: i64,

    /// Text content, for text messages.
    #[serde(default)]
    pub text: Option<String>,
}

/// A Telegram user or bot account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: i64,

    /// True when the account is a bot.
    #[serde(default)]
    pub is_bot: bool,

    /// First name.
    #[serde(default)]
    pub first_name: String,

    /// Username, without the leading `@`.
    #[serde(default)]
    pub username: Option<String>,
}

/// A chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,

    /// Chat type: "private", "group", "supergroup" or "channel".
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Reply markup accepted by `sendMessage`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    /// Show a custom reply keyboard.
    Keyboard(ReplyKeyboardMarkup),
    /// Remove the current custom keyboard.
    Remove(ReplyKeyboardRemove),
}

/// A custom reply keyboard.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    /// Button rows.
    pub keyboard: Vec<Vec<KeyboardButton>>,

    /// Fit the keyboard to the buttons instead of the default height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,

    /// Hide the keyboard again after one use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
}

impl ReplyKeyboardMarkup {
    /// Build a resizing, one-time keyboard from rows of button captions.
    pub fn one_time(rows: Vec<Vec<&str>>) -> Self {
        Self {
            keyboard: rows
                .into_iter()
                .map(|row| row.into_iter().map(KeyboardButton::new).collect())
                .collect(),
            resize_keyboard: Some(true),
            one_time_keyboard: Some(true),
        }
    }
}

/// One button of a reply keyboard.
#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    /// Caption; sent back verbatim as the message text when pressed.
    pub text: String,
}

impl KeyboardButton {
    /// Create a button with the given caption.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Request to remove the current custom keyboard.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardRemove {
    /// Always true.
    pub remove_keyboard: bool,
}

impl ReplyKeyboardRemove {
    /// Create a keyboard-removal request.
    pub fn new() -> Self {
        Self {
            remove_keyboard: true,
        }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageParams {
    /// Target chat.
    pub chat_id: i64,

    /// Message text.
    pub text: String,

    /// Optional reply markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessageParams {
    /// Plain text message.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_markup: None,
        }
    }

    /// Text message with reply markup attached.
    pub fn with_markup(chat_id: i64, text: impl Into<String>, markup: ReplyMarkup) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_markup: Some(markup),
        }
    }
}

/// Parameters for `getUpdates`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GetUpdatesParams {
    /// Identifier of the first update to return; set to the last seen
    /// `update_id + 1` to confirm earlier updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Maximum number of updates per call.
    pub limit: u32,

    /// Long-poll window in seconds.
    pub timeout: u64,
}
