use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use mentorbook_core::clock::SystemClock;
use mentorbook_web::{WebState, config::WebConfig, selection_store::SelectionStore};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = WebConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Connect to the mentor/booking backend
    let backend = mentorbook_backend::create_client(&config.backend_url)?;
    let clock = Arc::new(SystemClock::new(config.display_timezone));
    info!("Reading calendar dates in {}", config.display_timezone);

    // Start web server
    let selections = SelectionStore::new(config.selection_ttl, config.selection_capacity);
    let state = Arc::new(WebState::with_selection_store(backend, clock, selections));
    mentorbook_web::start_server(config, state).await?;

    Ok(())
}
