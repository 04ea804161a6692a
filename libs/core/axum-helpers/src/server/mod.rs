//! Server infrastructure module.
//!
//! - Router assembly with CORS, tracing, request timeouts and the 404 fallback
//! - Liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router(api_routes, &config.cors, config.server.request_timeout)?
//!     .merge(health_router(app_info!()));
//!
//! create_app(router, &config.server).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router, serve};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
