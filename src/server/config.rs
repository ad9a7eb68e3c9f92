use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9090";

pub struct Config {
    pub database_url: String,

    pub bind_addr: SocketAddr,

    /// Allowed browser origin. CORS is permissive when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr.clone(),
            })?;

        let cors_origin = std::env::var("CORS_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
        })
    }
}
