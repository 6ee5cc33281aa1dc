mod config;
mod error;
mod feed;
mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting eventfeed");

    // Load configuration
    let config = startup::load_config().await?;

    // Start the feed service
    startup::start_service(config).await
}
