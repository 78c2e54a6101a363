//! Event loop polling the d2gs status snapshot
use reqwest::Client;
use tokio::time::{self, Duration};
use tracing::info;

use crate::events::{StatusEvent, StatusSignal};
use crate::Sources;

/// Start the loop polling d2gs status and broadcasting [`StatusEvent`]
///
/// Every poll fully replaces the previous state, so a failed poll is healed by the next
/// one and overlapping polls need no coordination.
pub async fn start_loops(signal: StatusSignal, client: Client, sources: Sources, period_secs: u64) {
    tokio::spawn(async move {
        info!("Starting d2gs status loop");
        let mut interval = time::interval(Duration::from_secs(period_secs));
        loop {
            interval.tick().await;

            let event = match crate::load_d2gs_status(&client, &sources).await {
                Ok(status) => match status.uptime() {
                    Some(uptime) => StatusEvent::D2gsUp { uptime: uptime.to_string() },
                    None => StatusEvent::D2gsDown {
                        reason: status.message.unwrap_or_else(|| "Unknown error".to_string()),
                    },
                },
                Err(why) => StatusEvent::D2gsDown { reason: why.to_string() },
            };
            signal.signal(event);
        }
    });
}
