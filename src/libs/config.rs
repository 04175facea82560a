//! Configuration management for the taskd service.
//!
//! Configuration is sourced from environment variables, with optional
//! `.env` file support for development setups. Command-line flags may
//! override individual values after loading (see the `serve` command).
//!
//! ## Variables
//!
//! - **`TASKD_HOST`**: interface the HTTP listener binds to (default `127.0.0.1`)
//! - **`TASKD_PORT`**: listener port (default `8000`)
//! - **`TASKD_DB_PATH`**: SQLite database file (default: platform data
//!   directory, e.g. `~/.local/share/taskd/taskd.db` on Linux)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskd::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("binding {}", config.server.socket_addr());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

pub const ENV_HOST: &str = "TASKD_HOST";
pub const ENV_PORT: &str = "TASKD_PORT";
pub const ENV_DB_PATH: &str = "TASKD_DB_PATH";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Store connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Root configuration for the service process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// real environment variables take precedence over its contents.
    pub fn from_env() -> Result<Self> {
        if dotenv::dotenv().is_err() {
            tracing::debug!("No .env file found, using process environment only");
        }

        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow!("{} must be a port number, got '{}'", ENV_PORT, raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let path = match env::var(ENV_DB_PATH) {
            Ok(raw) => PathBuf::from(raw),
            Err(_) => DataStorage::new()
                .get_path(DB_FILE_NAME)
                .map_err(|e| anyhow!("{}", e))
                .context("Failed to resolve default database path")?,
        };

        Ok(Config {
            server: ServerConfig { host, port },
            database: DatabaseConfig { path },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
