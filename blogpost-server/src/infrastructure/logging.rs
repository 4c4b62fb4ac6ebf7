use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// sqlx logs every statement at info; keep it quiet unless RUST_LOG asks for it.
const QUIET_TARGETS: &str = "sqlx=warn";

pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{default_level},{QUIET_TARGETS}"))
            .unwrap_or_else(|_| EnvFilter::new(format!("info,{QUIET_TARGETS}"))),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}
