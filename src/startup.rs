use crate::config::Config;
use crate::error::Error;
use crate::feed::{start_scheduler, FeedHandle};
use crate::shutdown;
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Spawn the feed actor and scheduler, then wait for a shutdown signal
pub async fn start_service(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Create the feed handle (spawns the actor)
    let handle = FeedHandle::new(Arc::clone(&config));

    // Start the periodic refresh scheduler
    start_scheduler(Arc::clone(&config), handle.clone()).await;

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, shutdown_handle).await;
    });

    // Wait for the shutdown signal
    let _ = shutdown_recv.await;
    info!("Feed service stopped");

    Ok(())
}
