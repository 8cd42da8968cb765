//! Server settings loaded via OrthoConfig and the assembled server config.

use std::net::SocketAddr;
use std::time::Duration;

use bikes::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Raw settings read from the command line, `BIKES_*` variables and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BIKES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] with kind `InvalidInput` when the value is
    /// not a socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Database URL from `BIKES_DATABASE_URL`, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Pool configuration for the given database URL.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
            .with_connection_timeout(Duration::from_secs(
                self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
            ))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without a pool every port is served by its fixture.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("bikes")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("BIKES_BIND_ADDR", None::<String>),
            ("BIKES_DATABASE_URL", None::<String>),
            ("BIKES_POOL_MAX_SIZE", None::<String>),
            ("BIKES_POOL_TIMEOUT_SECS", None::<String>),
            ("BIKES_RUN_MIGRATIONS", None::<String>),
            ("DATABASE_URL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.database_url().is_none());
        assert!(settings.run_migrations());

        let pool = settings.pool_config("postgres://localhost/bikes");
        assert_eq!(pool.max_size(), 10);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BIKES_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "BIKES_DATABASE_URL",
                Some("postgres://db/bikes".to_owned()),
            ),
            ("BIKES_POOL_MAX_SIZE", Some("4".to_owned())),
            ("BIKES_POOL_TIMEOUT_SECS", Some("5".to_owned())),
            ("BIKES_RUN_MIGRATIONS", Some("false".to_owned())),
            ("DATABASE_URL", Some("postgres://fallback/bikes".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://db/bikes")
        );
        assert!(!settings.run_migrations());

        let pool = settings.pool_config("postgres://db/bikes");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn database_url_falls_back_to_plain_variable() {
        let _guard = lock_env([
            ("BIKES_DATABASE_URL", None::<String>),
            ("DATABASE_URL", Some("postgres://fallback/bikes".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://fallback/bikes")
        );
    }

    #[rstest]
    fn malformed_bind_address_is_rejected() {
        let _guard = lock_env([("BIKES_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let settings = load_from_empty_args();
        let err = settings.bind_addr().expect_err("invalid address");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
