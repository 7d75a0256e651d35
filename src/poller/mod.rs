//! Stats polling.
//!
//! One logical timer drives fetch-and-render cycles against the stats
//! endpoint: an immediate cycle at startup, then one per interval tick.
//! Each cycle is stateless and independent: fetch, decode, hand the result
//! to the application, done. A cycle is **Idle** between ticks and
//! **Polling** while awaiting the response; it returns to Idle
//! unconditionally on success or failure, and there is no terminal state —
//! the timer runs until the handle is stopped.
//!
//! Ticks do not wait for the previous cycle: if a fetch outlives the
//! interval, two cycles overlap and both deliver results, with the
//! later-arriving snapshot winning. This mirrors the producer-side contract
//! and is deliberate; see DESIGN.md.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::app::AppMessage;
use crate::error::PollError;
use crate::models::StatsSnapshot;
use crate::startup::Config;
use crate::traits::HttpClient;

/// Fetches snapshots from the stats endpoint.
///
/// Generic over [`HttpClient`] so tests can substitute a mock transport.
pub struct StatsPoller<C: HttpClient> {
    client: Arc<C>,
    url: String,
}

impl<C: HttpClient> StatsPoller<C> {
    /// Create a poller for the configured endpoint.
    pub fn new(client: Arc<C>, config: &Config) -> Self {
        Self {
            client,
            url: config.stats_url(),
        }
    }

    /// The full URL this poller fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run one poll cycle: GET the endpoint and decode the body.
    ///
    /// The await on the response is the only suspension point. Transport
    /// failures (including non-2xx statuses) and undecodable bodies are the
    /// two ways a cycle can fail; both are terminal for this cycle only.
    pub async fn poll_once(&self) -> Result<StatsSnapshot, PollError> {
        let response =
            self.client
                .get(&self.url)
                .await
                .map_err(|e| PollError::Transport {
                    url: self.url.clone(),
                    message: e.to_string(),
                })?;

        if !response.is_success() {
            return Err(PollError::Transport {
                url: self.url.clone(),
                message: format!("unexpected status {}", response.status),
            });
        }

        let snapshot: StatsSnapshot = response.json()?;
        Ok(snapshot)
    }
}

/// Handle to the polling task.
///
/// Owned by the run loop; dropping the handle does not stop the task, call
/// [`PollerHandle::stop`] when tearing the dashboard down. A cycle in
/// flight at that point is abandoned, not awaited.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the polling timer. Idempotent.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether the polling task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the polling timer.
///
/// Runs one immediate cycle, then one per `config.interval_ms`. Every
/// cycle's outcome is sent to `tx` as an [`AppMessage`]; the task exits
/// when the receiving side is gone.
pub fn spawn_poller<C>(
    client: Arc<C>,
    config: &Config,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> PollerHandle
where
    C: HttpClient + 'static,
{
    let poller = Arc::new(StatsPoller::new(client, config));
    let interval_ms = config.interval_ms;

    let task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(interval_ms));

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            // Fire-and-forget: the tick does not wait for the cycle, so a
            // slow endpoint can produce overlapping cycles (last write wins).
            let poller = Arc::clone(&poller);
            let tx = tx.clone();
            tokio::spawn(async move {
                let message = match poller.poll_once().await {
                    Ok(snapshot) => {
                        debug!(?snapshot, "updated stats");
                        AppMessage::Snapshot(snapshot)
                    }
                    Err(e) => {
                        warn!(code = e.code(), "poll cycle failed: {}", e);
                        AppMessage::PollFailed(e.to_string())
                    }
                };
                let _ = tx.send(message);
            });
        }
    });

    PollerHandle { task }
}
