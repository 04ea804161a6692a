//! Directory API server
//!
//! Serves `/api/users` over the PostgreSQL store when `DATABASE_URL` is set, otherwise over
//! the in-memory store.

mod config;
mod routes;

use axum_helpers::create_app;
use config::Config;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{self, PostgresConfig};
use domain_users::{InMemoryUserRepository, PostgresUserRepository, UserRepository, UserService};
use migration::Migrator;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        name = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Starting directory API"
    );

    match config.database.clone() {
        Some(database) => run_with_postgres(database, &config).await,
        None => {
            warn!("DATABASE_URL not set, users are kept in memory only");
            run(UserService::new(InMemoryUserRepository::new()), &config).await
        }
    }
}

async fn run_with_postgres(database: PostgresConfig, config: &Config) -> eyre::Result<()> {
    info!(url = %database.redacted_url(), "Connecting to PostgreSQL");
    let db = postgres::connect_from_config_with_retry(database, None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    run(UserService::new(PostgresUserRepository::new(db.clone())), config).await?;

    db.close().await?;
    info!("PostgreSQL connection closed");
    Ok(())
}

async fn run<R: UserRepository + 'static>(
    service: UserService<R>,
    config: &Config,
) -> eyre::Result<()> {
    if config.seed_demo_users {
        service.seed_demo_users().await?;
    }

    let app = routes::app(service, config)?;
    create_app(app, &config.server).await?;

    info!("Directory API shut down");
    Ok(())
}
