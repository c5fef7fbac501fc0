use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::{config::ApiConfig, connect_store, init_tracing, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration; an invalid schedule window stops startup here
    let config = ApiConfig::from_env()?;

    init_tracing(config.log_level)?;

    // Open the booking store
    let (store, store_kind) = connect_store(&config).await?;

    // Start API server
    start_server(config, store, store_kind).await?;

    Ok(())
}
