use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// - `DATABASE_URL` (required) - SeaORM connection string
    /// - `BIND_ADDR` (optional) - listen address, defaults to `0.0.0.0:5000`
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let bind_addr = std::env::var("BIND_ADDR").ok();

        Ok(Self::from_values(database_url, bind_addr.as_deref())?)
    }

    fn from_values(database_url: String, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let raw = bind_addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
