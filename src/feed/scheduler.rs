use super::handle::FeedHandle;
use super::models::FeedStatus;
use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration as TokioDuration};
use tracing::{error, info, warn};

/// Start the periodic refresh scheduler.
///
/// Refreshes once immediately and then on every interval tick. A cycle whose
/// network call outlives the interval is not serialized against; each cycle
/// is read-only and idempotent.
pub async fn start_scheduler(config: Arc<RwLock<Config>>, handle: FeedHandle) {
    let config_read = config.read().await;
    let interval_secs = config_read.refresh_interval_secs;
    let calendar_view_url = config_read.calendar_view_url.clone();
    drop(config_read);

    tokio::spawn(async move {
        loop {
            match handle.refresh().await {
                Ok(status) => report_status(&status, calendar_view_url.as_deref()),
                Err(e) => error!("Failed to refresh feed: {}", e),
            }

            sleep(TokioDuration::from_secs(interval_secs)).await;
        }
    });
}

/// Log the render-facing outcome of a cycle. The two failure-shaped states
/// are distinct: an unavailable feed points at the canonical calendar view,
/// an empty result just means nothing is scheduled.
fn report_status(status: &FeedStatus, calendar_view_url: Option<&str>) {
    match status {
        FeedStatus::Ready(events) if events.is_empty() => {
            info!("No upcoming events scheduled");
        }
        FeedStatus::Ready(events) => {
            for event in events {
                info!("Upcoming: {} ({})", event.summary, event.start.instant());
            }
        }
        FeedStatus::Unavailable => match calendar_view_url {
            Some(url) => warn!("Calendar unavailable, directing visitors to {}", url),
            None => warn!("Calendar unavailable"),
        },
    }
}
