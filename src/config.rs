//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://.data/database.db"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://.data/database.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)

use anyhow::Result;
use std::env;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://.data/database.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.db_max_connections);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.db_connect_timeout);

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `database_url` is not a SQLite URL
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Pool: max {} connections, {}s acquire timeout",
            self.db_max_connections,
            self.db_connect_timeout
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATABASE_URL",
        "LISTEN",
        "LOG_FORMAT",
        "DB_MAX_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());

        config.db_max_connections = 1;
        config.db_connect_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_uses_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://tmp/test.db");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DB_MAX_CONNECTIONS", "12");
            env::set_var("DB_CONNECT_TIMEOUT", "not-a-number");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://tmp/test.db");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.db_connect_timeout, 30);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
