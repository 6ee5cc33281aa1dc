use super::actor::{FeedActor, FeedActorHandle};
use super::models::FeedStatus;
use crate::config::Config;
use crate::error::FeedResult;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the feed actor
#[derive(Clone)]
pub struct FeedHandle {
    actor_handle: FeedActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl FeedHandle {
    /// Create a new FeedHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = FeedActor::new(config);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Run one refresh cycle and return the resulting status
    pub async fn refresh(&self) -> FeedResult<FeedStatus> {
        self.actor_handle.refresh().await
    }

    /// Get the latest cached status
    #[allow(dead_code)]
    pub async fn snapshot(&self) -> FeedResult<FeedStatus> {
        self.actor_handle.snapshot().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> FeedResult<()> {
        self.actor_handle.shutdown().await
    }
}
