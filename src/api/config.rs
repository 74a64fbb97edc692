use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_JWT_EXPIRATION_MINUTES: u64 = 60;
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

// API Config goes here
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Returns the process-wide configuration, loading it from the environment on first use.
    pub fn get() -> Result<&'static Config, ConfigError> {
        CONFIG.as_ref().map_err(Clone::clone)
    }

    /// Builds a configuration from a variable lookup. `Config::get` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt_expiration_minutes = match lookup("JWT_EXPIRATION_MINUTES") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_EXPIRATION_MINUTES", raw))?,
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        let raw_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::Invalid("SERVER_ADDR", raw_addr.clone()))?;

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_expiration_minutes,
            server_addr,
        })
    }
}

static CONFIG: Lazy<Result<Config, ConfigError>> = Lazy::new(|| {
    dotenv().ok();

    let config = Config::from_lookup(|key| std::env::var(key).ok());

    match &config {
        Ok(_) => tracing::info!("Config loaded"),
        Err(e) => tracing::error!("Failed to load config: {}", e),
    }

    config
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://localhost/pustok"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_expiration_minutes, 60);
        assert_eq!(config.server_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn missing_secret_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "mysql://localhost/pustok")]))
            .unwrap_err();

        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn invalid_expiration_is_reported() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://localhost/pustok"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRATION_MINUTES", "soon"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Invalid("JWT_EXPIRATION_MINUTES", "soon".to_string()));
    }
}
