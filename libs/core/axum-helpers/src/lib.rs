//! # Axum Helpers
//!
//! Shared HTTP plumbing for the directory services.
//!
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: CORS layer
//! - **[`errors`]**: error envelope with stable error codes
//! - **[`extractors`]**: integer path ids, plain and validated JSON bodies
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router(api_routes, &cors, timeout)?.merge(health_router(app_info!()));
//! create_app(router, &server_config).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, JsonBody, ValidatedJson};
pub use http::create_cors_layer;
pub use server::{
    HealthResponse, create_app, create_router, health_router, serve, shutdown_signal,
};
