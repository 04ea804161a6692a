//! Users Domain
//!
//! A directory of people: names, email, mobile and address, with field rules shared by
//! the server and its clients.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐
//! │  Handlers   │   │   Client    │  ← HTTP endpoints / HTTP caller (feature `client`)
//! └──────┬──────┘   └──────┬──────┘
//!        │                 │
//! ┌──────▼──────┐          │
//! │   Service   │  ← validation, id agreement
//! └──────┬──────┘          │
//!        │                 │
//! ┌──────▼──────┐          │
//! │ Repository  │  ← in-memory or PostgreSQL
//! └──────┬──────┘          │
//!        │                 │
//! ┌──────▼─────────────────▼──┐
//! │  Models + Validation      │
//! └───────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let app: Router = Router::new().nest("/api/users", handlers::router(service));
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

#[cfg(feature = "client")]
pub use client::{ClientError, ClientResult, UserApi, UserClient};
pub use error::{UserError, UserResult};
pub use models::{UpdateUserRequest, User, UserDraft};
pub use postgres::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use validation::{Field, FieldErrors};
