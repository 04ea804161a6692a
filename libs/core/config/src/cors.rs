use crate::{env_or_default, ConfigError, FromEnv};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Cross-origin allow-list for browser clients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Splits a comma-separated origin list, dropping blanks and trailing slashes.
    fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
        let mut origins = Vec::new();

        for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let has_scheme = origin.starts_with("http://") || origin.starts_with("https://");
            if !has_scheme || origin.chars().any(char::is_whitespace) {
                return Err(ConfigError::ParseError {
                    key: "CORS_ALLOWED_ORIGINS".to_string(),
                    details: format!("invalid origin '{}'", origin),
                });
            }
            origins.push(origin.trim_end_matches('/').to_string());
        }

        Ok(origins)
    }
}

impl FromEnv for CorsConfig {
    /// Reads CORS_ALLOWED_ORIGINS (comma-separated), defaulting to the local dev client.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS);
        Ok(Self {
            allowed_origins: Self::parse_origins(&raw)?,
        })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGINS.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_defaults_to_local_client() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGINS", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config, CorsConfig::default());
        });
    }

    #[test]
    fn test_cors_config_parses_list() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGINS",
            Some("http://localhost:3000, https://users.example.com/ ,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:3000", "https://users.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_origin_without_scheme() {
        temp_env::with_var("CORS_ALLOWED_ORIGINS", Some("localhost:3000"), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGINS"));
        });
    }
}
