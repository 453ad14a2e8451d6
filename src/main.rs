//! Binary entry point: run the harvest once with the compiled-in sources.

use ip_harvester::{Config, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ip_harvester::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::default();
    info!("harvesting {} sources", config.sources.len());

    let written = run(&config).await?;
    info!(
        "collected {} unique addresses into {}",
        written,
        config.output_path.display()
    );
    Ok(())
}
