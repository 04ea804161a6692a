//! PostgreSQL connection management and migration runner

mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, ping, run_migrations};

pub use sea_orm::{DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
