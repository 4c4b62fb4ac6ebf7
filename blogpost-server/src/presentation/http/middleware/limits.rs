use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::{BoxError, Json, Router};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::error::Elapsed;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::error;

use crate::infrastructure::settings::Settings;
use crate::presentation::http::app_error::ErrorBody;

/// Body size, in-flight request cap and per-request timeout.
///
/// The concurrency cap is server-wide: `Router::layer` clones the layer per route,
/// and every clone of `GlobalConcurrencyLimitLayer` shares one semaphore.
pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(
            settings.http_request_body_limit_bytes,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(GlobalConcurrencyLimitLayer::new(
                    settings.http_concurrency_limit,
                ))
                .timeout(Duration::from_secs(settings.http_request_timeout_secs)),
        )
}

async fn handle_layer_error(err: BoxError) -> (StatusCode, Json<ErrorBody>) {
    if err.is::<Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorBody::new("request timed out")),
        );
    }

    error!(%err, "middleware failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("internal error")),
    )
}
