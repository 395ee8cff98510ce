mod error;
mod site;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,card_types=debug,tower_http=debug")),
        )
        .init();
    site::start_web().await?;
    Ok(())
}
