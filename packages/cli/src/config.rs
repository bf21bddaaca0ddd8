// ABOUTME: Server configuration loaded from the environment
// ABOUTME: Database location, pool size and listen address with validated fallbacks

use std::env;
use std::num::ParseIntError;

use thiserror::Error;
use worktrack_config::{
    DB_MAX_CONNECTIONS, DB_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_URL, DEFAULT_HOST,
    DEFAULT_PORT, HOST, PORT,
};
use worktrack_storage::DbConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[source] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid DB_MAX_CONNECTIONS value: {0}")]
    InvalidMaxConnections(#[source] ParseIntError),
    #[error("DB_MAX_CONNECTIONS must be at least 1")]
    ZeroMaxConnections,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(PORT) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var(HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let database_url = env::var(DB_URL).unwrap_or_else(|_| DEFAULT_DB_URL.to_string());

        let max_connections = match env::var(DB_MAX_CONNECTIONS) {
            Ok(raw) => {
                let value = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(ConfigError::InvalidMaxConnections)?;
                if value == 0 {
                    return Err(ConfigError::ZeroMaxConnections);
                }
                value
            }
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Config {
            host,
            port,
            database_url,
            max_connections,
        })
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
        }
    }
}

/// Parses a listen port, rejecting 0.
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let port = raw.trim().parse::<u16>().map_err(ConfigError::InvalidPort)?;
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}
