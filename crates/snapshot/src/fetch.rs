//! Cache busted fetching of snapshot files
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::SnapshotError;

/// Append the cache busting query parameter, so a stale proxy never serves an old snapshot.
fn cache_busted(url: &str) -> String {
    format!("{}?_={}", url, chrono::Utc::now().timestamp_millis())
}

/// Make a request with exponential backoff
///
/// # Errors
/// Returns [`reqwest::Error`] if something went wrong while sending request.
async fn request(client: &Client, max_interval: u64, url: &str, ctx: &str) -> Result<Response, reqwest::Error> {
    let backoff = ExponentialBackoffBuilder::default()
        .with_max_interval(Duration::from_secs(max_interval))
        .with_max_elapsed_time(Some(Duration::from_secs(max_interval * 5)))
        .build();
    backoff::future::retry(backoff, || async {
        let result = client.get(url).send().await;
        if let Err(why) = &result {
            request_error_log(why, ctx);
        }
        Ok(result?)
    })
    .await
}

/// Logs [`reqwest::Error`]
fn request_error_log(err: &reqwest::Error, ctx: &str) {
    if err.is_timeout() {
        warn!("Timeout when requesting {}: {}", ctx, err);
    } else if err.is_status() {
        error!("Received error status when requesting {}: {}", ctx, err);
    } else if err.is_request() {
        error!("Requesting {} failed: {}", ctx, err);
    } else if err.is_connect() {
        error!("Failed to connect when requesting {}: {}", ctx, err);
    } else {
        error!("Error when requesting {}: {}", ctx, err);
    }
}

/// Fetch a snapshot file as text.
///
/// Non success statuses count as the source being unavailable, never as a panic or an
/// opaque transport error bubbling up to rendering.
pub async fn fetch_text(client: &Client, url: &str, what: &str) -> Result<String, SnapshotError> {
    let resp = request(client, 2, &cache_busted(url), what)
        .await
        .map_err(|_| SnapshotError::Unavailable(what.to_string()))?;
    if !resp.status().is_success() {
        error!("Received status {} when requesting {}", resp.status(), what);
        return Err(SnapshotError::Unavailable(what.to_string()));
    }
    resp.text().await.map_err(|_| SnapshotError::Unavailable(what.to_string()))
}

/// Fetch and parse a json snapshot
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client, url: &str, what: &str,
) -> Result<T, SnapshotError> {
    let text = fetch_text(client, url, what).await?;
    serde_json::from_str(&text).map_err(|why| {
        error!("Failed to parse {} from json: {}", what, why);
        SnapshotError::Parse(what.to_string())
    })
}

/// Fetch and parse an xml snapshot
pub async fn fetch_xml<T: DeserializeOwned>(
    client: &Client, url: &str, what: &str,
) -> Result<T, SnapshotError> {
    let text = fetch_text(client, url, what).await?;
    quick_xml::de::from_str(&text).map_err(|why| {
        error!("Failed to parse {} from xml: {}", what, why);
        SnapshotError::Parse(what.to_string())
    })
}

/// Fetch a plain text uptime counter, garbage content counts as 0
pub async fn fetch_seconds(client: &Client, url: &str, what: &str) -> Result<u64, SnapshotError> {
    let text = fetch_text(client, url, what).await?;
    Ok(util::string::coerce_seconds(&text))
}
