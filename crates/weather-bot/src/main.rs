use std::env;
use std::path::Path;

use database::Database;
use forecast::ForecastService;
use message_listener::{MessageProcessor, ProcessorConfig};
use telegram_daemon::{BotConfig, TelegramClient};
use tracing::info;

/// Default SQLite database location.
const DEFAULT_SQLITE_PATH: &str = "./data/pohoda.db";

fn sqlite_url_from_path(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite:{}?mode=rwc", path)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Fail fast on missing credentials, before anything connects
    let forecast = ForecastService::from_env()?;
    let bot_config = BotConfig::from_env()?;

    let sqlite_path = env::var("SQLITE_PATH").unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string());
    if !sqlite_path.starts_with("sqlite:") {
        if let Some(parent) = Path::new(&sqlite_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::connect(&sqlite_url_from_path(&sqlite_path)).await?;
    db.migrate().await?;

    let client = TelegramClient::connect(bot_config).await?;

    let processor = MessageProcessor::new(client, forecast, db, ProcessorConfig::with_wait_notice());

    info!("Bot started");
    processor
        .run_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
