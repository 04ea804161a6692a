//! HTTP middleware module.
//!
//! ```ignore
//! use axum_helpers::http::create_cors_layer;
//!
//! let app = Router::new().layer(create_cors_layer(&config.cors.allowed_origins)?);
//! ```

pub mod cors;

pub use cors::create_cors_layer;
