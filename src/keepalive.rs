use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;

/// Hosting platforms idle processes out after ~15 minutes without traffic;
/// ping ourselves just inside that window.
pub const PING_PERIOD: Duration = Duration::from_secs(14 * 60);

/// Spawn the self-ping loop. Each cycle is independent: a failed ping is
/// logged and swallowed, never escalated. The first ping fires one full
/// period after startup.
pub fn spawn(config: &Config, cancel: CancellationToken) -> JoinHandle<()> {
    let url = config.self_ping_url();

    tokio::spawn(async move {
        let client = reqwest::Client::new();
        tracing::info!("keep-alive timer started, pinging {url} every {PING_PERIOD:?}");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(PING_PERIOD) => {
                    match client.get(&url).send().await {
                        Ok(response) => {
                            tracing::info!("🔁 self ping sent ({})", response.status());
                        }
                        Err(e) => {
                            tracing::warn!("self ping failed: {e}");
                        }
                    }
                }
                _ = cancel.cancelled() => {
                    tracing::info!("keep-alive timer stopped");
                    break;
                }
            }
        }
    })
}
