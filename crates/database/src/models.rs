//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row, keyed by the Telegram account id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    /// Telegram user id.
    pub user_id: i64,
    /// Last-seen username; overwritten on every interaction.
    pub username: Option<String>,
    /// Preferred reply language code ("uk" or "en").
    pub language: String,
}
