//! User preference operations.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::Result;
use crate::models::UserRecord;

/// Language stored for users that have never picked one.
///
/// Must match the `users.language` column default in the migrations.
pub const DEFAULT_LANGUAGE: &str = "uk";

/// Create or update a user row.
///
/// `username` is always overwritten with the last-seen value. `language`
/// is only overwritten when `Some`; otherwise an existing row keeps its
/// stored language and a fresh row gets the column default.
pub async fn upsert_user(
    pool: &SqlitePool,
    user_id: i64,
    username: Option<&str>,
    language: Option<&str>,
) -> Result<()> {
    match language {
        Some(language) => {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username, language)
                VALUES (?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    username = excluded.username,
                    language = excluded.language
                "#,
            )
            .bind(user_id)
            .bind(username)
            .bind(language)
            .execute(pool)
            .await?;
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username)
                VALUES (?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    username = excluded.username
                "#,
            )
            .bind(user_id)
            .bind(username)
            .execute(pool)
            .await?;
        }
    }

    Ok(())
}

/// Get the stored language for a user, or [`DEFAULT_LANGUAGE`] when the
/// user has no row.
pub async fn get_language(pool: &SqlitePool, user_id: i64) -> Result<String> {
    let language = sqlx::query_scalar::<_, String>(
        r#"
        SELECT language
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()))
}

/// Overwrite the language for an existing user.
///
/// Unlike [`upsert_user`] this never creates a row; setting the language
/// for an unknown user is a no-op.
pub async fn set_language(pool: &SqlitePool, user_id: i64, language: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET language = ?
        WHERE user_id = ?
        "#,
    )
    .bind(language)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        debug!("set_language for unknown user {}", user_id);
    }

    Ok(())
}

/// Get a user row by id.
pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<Option<UserRecord>> {
    let record = sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT user_id, username, language
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}
