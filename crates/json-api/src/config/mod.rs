//! Server configuration module

use clap::Parser;

use crate::config::{
    cors::CorsConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Product Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Missing .env is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{observability::LogFormat, *};

    #[test]
    fn defaults_apply_when_only_database_url_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.run_migrations);
        assert!(config.cors.frontend_url.is_none());
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
            "--database-url",
            "postgres://localhost/catalog",
            "--run-migrations",
            "false",
            "--frontend-url",
            "http://localhost:5173",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(!config.database.run_migrations);
        assert_eq!(
            config.cors.frontend_url.as_deref(),
            Some("http://localhost:5173")
        );
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
