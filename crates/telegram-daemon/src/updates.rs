//! Long-polling update stream.

use std::collections::VecDeque;
use std::time::Duration;

use futures::stream::Stream;
use tracing::{debug, info, warn};

use crate::client::TelegramClient;
use crate::error::TelegramError;
use crate::types::{GetUpdatesParams, Update};

/// Configuration for the long-polling loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Maximum updates fetched per `getUpdates` call.
    pub limit: u32,
    /// Server-side long-poll window in seconds.
    pub timeout_secs: u64,
    /// Delay before the next poll after a failed one.
    pub error_delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            timeout_secs: 50,
            error_delay: Duration::from_secs(5),
        }
    }
}

struct PollState {
    client: TelegramClient,
    config: PollConfig,
    offset: Option<i64>,
    buffered: VecDeque<Update>,
    last_poll_failed: bool,
}

/// Subscribe to incoming updates with the default poll configuration.
///
/// Returns an endless stream of updates. Poll failures are yielded as
/// errors and the stream resumes polling after [`PollConfig::error_delay`];
/// the subscription itself never ends.
pub fn subscribe(client: &TelegramClient) -> impl Stream<Item = Result<Update, TelegramError>> + Send {
    subscribe_with_config(client, PollConfig::default())
}

/// Subscribe to incoming updates with a custom poll configuration.
pub fn subscribe_with_config(
    client: &TelegramClient,
    config: PollConfig,
) -> impl Stream<Item = Result<Update, TelegramError>> + Send {
    info!(
        "Starting long poll (limit: {}, timeout: {}s)",
        config.limit, config.timeout_secs
    );

    let state = PollState {
        client: client.clone(),
        config,
        offset: None,
        buffered: VecDeque::new(),
        last_poll_failed: false,
    };

    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(update) = state.buffered.pop_front() {
                return Some((Ok(update), state));
            }

            if state.last_poll_failed {
                tokio::time::sleep(state.config.error_delay).await;
            }

            let params = GetUpdatesParams {
                offset: state.offset,
                limit: state.config.limit,
                timeout: state.config.timeout_secs,
            };

            match state.client.get_updates(params).await {
                Ok(updates) => {
                    state.last_poll_failed = false;
                    if let Some(last) = updates.last() {
                        // Confirm everything we just received
                        state.offset = Some(last.update_id + 1);
                    }
                    debug!("Poll returned {} updates", updates.len());
                    state.buffered.extend(updates);
                }
                Err(e) => {
                    warn!("getUpdates failed: {}", e);
                    state.last_poll_failed = true;
                    return Some((Err(e), state));
                }
            }
        }
    })
}
