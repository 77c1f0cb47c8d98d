//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://questlog.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `SQLite` connection URL; the file is created if missing.
    pub database_url: String,
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Upper bound on pooled store connections.
    pub max_connections: u32,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST`, `PORT`, and `DATABASE_MAX_CONNECTIONS`
    /// from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS must be a valid u32: {e}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
