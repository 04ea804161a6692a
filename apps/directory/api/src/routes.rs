//! HTTP surface of the directory API

use axum::Router;
use axum_helpers::{create_router, health_router};
use domain_users::{UserRepository, UserService, handlers};
use std::io;

use crate::config::Config;

/// Routes mounted under `/api`
pub fn api_routes<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new().nest("/users", handlers::router(service))
}

/// Full application: `/api/users`, `/health`, and the shared middleware stack.
pub fn app<R: UserRepository + 'static>(
    service: UserService<R>,
    config: &Config,
) -> io::Result<Router> {
    let router = create_router(
        api_routes(service),
        &config.cors,
        config.server.request_timeout,
    )?;

    Ok(router.merge(health_router(config.app)))
}
