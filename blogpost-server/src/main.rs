use anyhow::Result;
use blogpost_server::{Settings, init_logging, start};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let server = start(&settings).await?;

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");

    server.shutdown().await
}
