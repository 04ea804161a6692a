use core_config::{
    AppInfo, Environment, FromEnv, app_info, cors::CorsConfig, env_flag, env_optional,
    server::ServerConfig,
};
use database::postgres::PostgresConfig;

/// Directory API configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    /// `None` selects the in-memory store
    pub database: Option<PostgresConfig>,
    pub seed_demo_users: bool,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let database = match env_optional("DATABASE_URL") {
            Some(_) => Some(PostgresConfig::from_env()?),
            None => None,
        };

        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            database,
            seed_demo_users: env_flag("SEED_DEMO_USERS", false)?,
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_in_memory_store() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("SEED_DEMO_USERS", None),
                ("CORS_ALLOWED_ORIGINS", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.database.is_none());
                assert!(!config.seed_demo_users);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
                assert_eq!(config.app.name, "directory_api");
            },
        );
    }

    #[test]
    fn test_database_url_selects_postgres() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://app:secret@db:5432/directory")),
                ("SEED_DEMO_USERS", Some("true")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.unwrap();
                assert_eq!(database.url, "postgres://app:secret@db:5432/directory");
                assert!(config.seed_demo_users);
            },
        );
    }

    #[test]
    fn test_invalid_seed_flag_is_rejected() {
        temp_env::with_var("SEED_DEMO_USERS", Some("maybe"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
