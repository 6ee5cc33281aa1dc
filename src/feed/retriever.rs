use crate::error::{fetch_error, FeedResult};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use url::Url;

/// JSON envelope returned by the pass-through proxy
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Fetch the raw feed text.
///
/// One attempt against the feed URL directly; if that fails for any reason
/// (network error, cross-origin rejection, non-success status) a single
/// fallback request goes through the pass-through proxy. No retries beyond
/// that, and no timeout layered above the transport's own.
pub async fn retrieve(client: &Client, feed_url: &str, proxy_url: &str) -> FeedResult<String> {
    match fetch_direct(client, feed_url).await {
        Ok(raw) => Ok(raw),
        Err(e) => {
            warn!("Direct feed fetch failed, falling back to proxy: {}", e);
            fetch_via_proxy(client, proxy_url, feed_url).await
        }
    }
}

/// Primary transport: plain GET of the feed URL, uncached
async fn fetch_direct(client: &Client, feed_url: &str) -> FeedResult<String> {
    let response = client
        .get(feed_url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| fetch_error(&format!("Failed to fetch feed: {}", e)))?;

    if !response.status().is_success() {
        return Err(fetch_error(&format!(
            "Feed request returned HTTP {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| fetch_error(&format!("Failed to read feed body: {}", e)))
}

/// Fallback transport: the proxy wraps the feed URL and returns the feed
/// text in the `contents` field of a JSON envelope
async fn fetch_via_proxy(client: &Client, proxy_url: &str, feed_url: &str) -> FeedResult<String> {
    let mut url = Url::parse(proxy_url)
        .map_err(|e| fetch_error(&format!("Failed to parse proxy URL: {}", e)))?;
    url.query_pairs_mut().append_pair("url", feed_url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_error(&format!("Proxy fetch failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(fetch_error(&format!(
            "Proxy request returned HTTP {}",
            response.status()
        )));
    }

    let envelope: ProxyEnvelope = response
        .json()
        .await
        .map_err(|e| fetch_error(&format!("Failed to decode proxy envelope: {}", e)))?;

    Ok(envelope.contents)
}
