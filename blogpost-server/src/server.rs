use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::infrastructure::database::{create_pool, run_migrations};
use crate::infrastructure::settings::Settings;
use crate::presentation::AppState;
use crate::presentation::http::build_router;
use crate::presentation::http::middleware::cors::apply_cors;
use crate::presentation::http::middleware::limits::apply_limits;
use crate::presentation::http::middleware::trace::apply_trace;

/// A running server. Obtained from [`start`]; consumed by [`ServerHandle::shutdown`].
pub struct ServerHandle {
    local_addr: SocketAddr,
    pool: PgPool,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Closes the database pool, then stops accepting connections and waits for the
    /// serve task to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.pool.close().await;
        info!("database pool closed");

        // receiver is gone only if the serve task already ended; its result is read below
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .context("server task panicked")?
            .context("server terminated with error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Connects to the database, applies migrations and starts serving on `settings.http_addr`.
pub async fn start(settings: &Settings) -> Result<ServerHandle> {
    let pool = create_pool(settings).await?;
    if let Err(err) = run_migrations(&pool).await {
        pool.close().await;
        return Err(err);
    }

    let state = AppState::with_pool(&pool);
    serve(settings, pool, state).await
}

pub(crate) fn build_http_app(settings: &Settings, state: AppState) -> Result<Router> {
    let app = build_router(state);
    let app = apply_limits(app, settings);
    let app = apply_trace(app);
    apply_cors(app, settings)
}

pub(crate) async fn serve(settings: &Settings, pool: PgPool, state: AppState) -> Result<ServerHandle> {
    let app = match build_http_app(settings, state) {
        Ok(app) => app,
        Err(err) => {
            pool.close().await;
            return Err(err);
        }
    };

    let listener = match TcpListener::bind(&settings.http_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            pool.close().await;
            return Err(err).with_context(|| format!("failed to bind {}", settings.http_addr));
        }
    };
    let local_addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    info!("HTTP server listening on {local_addr}");
    Ok(ServerHandle {
        local_addr,
        pool,
        shutdown_tx,
        task,
    })
}
