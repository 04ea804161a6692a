use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::create_cors_layer;
use axum::{Router, http::StatusCode};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Binds the configured address and serves `router` until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    serve(listener, router, shutdown_signal()).await
}

/// Serves `router` on an already bound listener until `shutdown` resolves.
///
/// Tests bind `127.0.0.1:0` and pass their own shutdown future.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Combines API routes with the cross-cutting layers every directory service uses.
///
/// - API routes nested under `/api`
/// - 404 fallback in the standard error envelope
/// - request tracing at INFO
/// - per-request timeout answered with 408
/// - CORS restricted to `cors.allowed_origins`
///
/// Domain routers apply their own state before being passed in.
///
/// # Errors
/// Returns an error if an allowed origin is not a valid header value.
pub fn create_router(
    apis: Router,
    cors: &CorsConfig,
    request_timeout: Duration,
) -> io::Result<Router> {
    let cors_layer = create_cors_layer(&cors.allowed_origins).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGINS value: {e}"),
        )
    })?;

    info!(
        origins = ?cors.allowed_origins,
        timeout = ?request_timeout,
        "Router configured"
    );

    let router = Router::new()
        .nest("/api", apis)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer);

    Ok(router)
}
