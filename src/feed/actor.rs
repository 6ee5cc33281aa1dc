use super::models::FeedStatus;
use super::{parser, retriever, selector};
use crate::config::Config;
use crate::error::{component_error, FeedResult};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info};

/// The feed actor that processes messages
pub struct FeedActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    snapshot: FeedStatus,
    command_rx: mpsc::Receiver<FeedCommand>,
}

/// Commands that can be sent to the feed actor
pub enum FeedCommand {
    Refresh(mpsc::Sender<FeedStatus>),
    GetSnapshot(mpsc::Sender<FeedStatus>),
    Shutdown,
}

/// Handle for communicating with the feed actor
#[derive(Clone)]
pub struct FeedActorHandle {
    command_tx: mpsc::Sender<FeedCommand>,
}

impl FeedActorHandle {
    /// Run one retrieve-parse-select cycle and return the resulting status
    pub async fn refresh(&self) -> FeedResult<FeedStatus> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(FeedCommand::Refresh(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))
    }

    /// Get the latest cached status without triggering a fetch
    #[allow(dead_code)]
    pub async fn snapshot(&self) -> FeedResult<FeedStatus> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(FeedCommand::GetSnapshot(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> FeedResult<()> {
        let _ = self.command_tx.send(FeedCommand::Shutdown).await;
        Ok(())
    }
}

impl FeedActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, FeedActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            client: Client::new(),
            // Nothing fetched yet; the scheduler refreshes right at startup
            snapshot: FeedStatus::Unavailable,
            command_rx,
        };

        let handle = FeedActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Feed actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                FeedCommand::Refresh(response_tx) => {
                    self.snapshot =
                        Self::run_cycle(Arc::clone(&self.config), self.client.clone()).await;
                    let _ = response_tx.send(self.snapshot.clone()).await;
                }
                FeedCommand::GetSnapshot(response_tx) => {
                    let _ = response_tx.send(self.snapshot.clone()).await;
                }
                FeedCommand::Shutdown => {
                    info!("Feed actor shutting down");
                    break;
                }
            }
        }

        info!("Feed actor shut down");
    }

    /// One full pipeline cycle: retrieve, parse, select.
    ///
    /// All failures converge here into `FeedStatus::Unavailable`; nothing
    /// escapes to the scheduler. An empty feed is a valid `Ready` result.
    async fn run_cycle(config: Arc<RwLock<Config>>, client: Client) -> FeedStatus {
        let (feed_url, proxy_url, event_limit) = {
            let config_read = config.read().await;
            (
                config_read.feed_url.clone(),
                config_read.proxy_url.clone(),
                config_read.event_limit,
            )
        };

        let raw = match retriever::retrieve(&client, &feed_url, &proxy_url).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Feed unavailable this cycle: {}", e);
                return FeedStatus::Unavailable;
            }
        };

        let events = parser::parse(&raw);
        let upcoming = selector::select_upcoming(events, Utc::now(), event_limit);
        info!("Feed refreshed, {} upcoming event(s)", upcoming.len());

        FeedStatus::Ready(upcoming)
    }
}
