use crate::error::{config_error, env_error, FeedResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default pass-through proxy endpoint for feeds blocked by cross-origin policy
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get";

/// Default number of upcoming events handed to the rendering layer
pub const DEFAULT_EVENT_LIMIT: usize = 3;

/// Default refresh interval in seconds (once per hour)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;

/// Main configuration structure for the feed service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Public calendar export URL to fetch
    pub feed_url: String,
    /// Pass-through proxy endpoint used when the direct fetch fails
    pub proxy_url: String,
    /// Maximum number of upcoming events to select
    pub event_limit: usize,
    /// Seconds between refresh cycles
    pub refresh_interval_secs: u64,
    /// Canonical calendar view linked when the feed is unavailable
    pub calendar_view_url: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> FeedResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let feed_url = env::var("FEED_URL").map_err(|_| env_error("FEED_URL"))?;

        // Optional overrides with defaults
        let proxy_url = env::var("PROXY_URL").unwrap_or_else(|_| String::from(DEFAULT_PROXY_URL));

        let event_limit = match env::var("EVENT_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| config_error("Invalid EVENT_LIMIT format"))?,
            Err(_) => DEFAULT_EVENT_LIMIT,
        };

        let refresh_interval_secs = match env::var("REFRESH_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| config_error("Invalid REFRESH_INTERVAL_SECS format"))?,
            Err(_) => DEFAULT_REFRESH_INTERVAL_SECS,
        };

        let calendar_view_url = env::var("CALENDAR_VIEW_URL").ok();

        Ok(Config {
            feed_url,
            proxy_url,
            event_limit,
            refresh_interval_secs,
            calendar_view_url,
        })
    }
}
