//! Configuration
//!
//! TigerStyle: Parse flags and environment once at start-up, validate the
//! combination, then hand a plain `Config` to the rest of the program.
//!
//! Every flag has an environment fallback, and `main` loads `.env` first.

use std::net::SocketAddr;

use clap::{ArgAction, Parser, ValueEnum};
use sprout_store::{
    IdStrategy, POSTGRES_CONNECTIONS_COUNT_DEFAULT, POSTGRES_CONNECTIONS_COUNT_MAX,
};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Default HTTP bind address
pub const HTTP_BIND_ADDRESS_DEFAULT: &str = "127.0.0.1:5000";

/// Application name
pub const APP_NAME: &str = "sprout";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CLI
// =============================================================================

/// Which storage backend to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Process-local maps, lost on restart
    Memory,
    /// PostgreSQL via `DATABASE_URL`
    Postgres,
}

/// Sprout - project and folder API
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "Project and folder API for the idea launcher")]
#[command(version)]
pub struct Cli {
    /// HTTP bind address
    #[arg(short, long, env = "SPROUT_BIND", default_value = HTTP_BIND_ADDRESS_DEFAULT)]
    pub bind: String,

    /// Storage backend
    #[arg(long, env = "SPROUT_BACKEND", value_enum, default_value_t = BackendKind::Memory)]
    pub backend: BackendKind,

    /// PostgreSQL connection URL (postgres backend only)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Postgres pool size
    #[arg(
        long,
        env = "SPROUT_MAX_CONNECTIONS",
        default_value_t = POSTGRES_CONNECTIONS_COUNT_DEFAULT
    )]
    pub max_connections: u32,

    /// Id scheme for the memory backend: sequential or uuid
    #[arg(long, env = "SPROUT_ID_STRATEGY", default_value = "sequential")]
    pub id_strategy: IdStrategy,

    /// Enable verbose logging
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// =============================================================================
// Config
// =============================================================================

/// Storage selection after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory backend
    Memory {
        /// Id scheme
        id_strategy: IdStrategy,
    },
    /// Postgres backend
    Postgres {
        /// Connection URL
        url: String,
        /// Pool size
        max_connections: u32,
    },
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Backend to open
    pub storage: StorageConfig,
    /// `-v` count
    pub verbose: u8,
}

impl Config {
    /// Validate parsed flags.
    ///
    /// # Errors
    /// Returns `ConfigError` when the bind address does not parse, the
    /// postgres backend has no URL, or the pool size is out of range.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let bind = cli
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(cli.bind.clone()))?;

        let storage = match cli.backend {
            BackendKind::Memory => StorageConfig::Memory {
                id_strategy: cli.id_strategy,
            },
            BackendKind::Postgres => {
                let url = cli
                    .database_url
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                    return Err(ConfigError::InvalidDatabaseUrl);
                }
                if !(1..=POSTGRES_CONNECTIONS_COUNT_MAX).contains(&cli.max_connections) {
                    return Err(ConfigError::InvalidMaxConnections {
                        value: cli.max_connections,
                        max: POSTGRES_CONNECTIONS_COUNT_MAX,
                    });
                }
                StorageConfig::Postgres {
                    url,
                    max_connections: cli.max_connections,
                }
            }
        };

        Ok(Self {
            bind,
            storage,
            verbose: cli.verbose,
        })
    }

    /// Default tracing filter for the verbosity level.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info,tower_http=debug",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Invalid configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidBind(String),

    #[error("postgres backend requires --database-url or DATABASE_URL")]
    MissingDatabaseUrl,

    #[error("database url must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("max connections {value} outside 1..={max}")]
    InvalidMaxConnections { value: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec![APP_NAME];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_memory_backend_with_explicit_flags() {
        let config = Config::from_cli(parse(&[
            "--bind",
            "127.0.0.1:5000",
            "--backend",
            "memory",
            "--id-strategy",
            "uuid",
        ]))
        .unwrap();

        assert_eq!(config.bind.port(), 5000);
        assert_eq!(
            config.storage,
            StorageConfig::Memory {
                id_strategy: IdStrategy::Uuid
            }
        );
    }

    #[test]
    fn test_postgres_backend() {
        let config = Config::from_cli(parse(&[
            "--backend",
            "postgres",
            "--database-url",
            "postgres://localhost/sprout",
            "--max-connections",
            "4",
        ]))
        .unwrap();

        assert_eq!(
            config.storage,
            StorageConfig::Postgres {
                url: "postgres://localhost/sprout".to_string(),
                max_connections: 4,
            }
        );
    }

    #[test]
    fn test_postgres_url_scheme_checked() {
        let err = Config::from_cli(parse(&[
            "--backend",
            "postgres",
            "--database-url",
            "mysql://localhost/sprout",
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidDatabaseUrl);
    }

    #[test]
    fn test_postgres_pool_size_checked() {
        let err = Config::from_cli(parse(&[
            "--backend",
            "postgres",
            "--database-url",
            "postgres://localhost/sprout",
            "--max-connections",
            "0",
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidMaxConnections { value: 0, .. }
        ));
    }

    #[test]
    fn test_bad_bind_address() {
        let err = Config::from_cli(parse(&["--bind", "not-an-address"])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBind("not-an-address".to_string()));
    }

    #[test]
    fn test_unknown_id_strategy_rejected_by_parser() {
        let result = Cli::try_parse_from([APP_NAME, "--id-strategy", "snowflake"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter_by_verbosity() {
        let config = Config::from_cli(parse(&["--bind", "127.0.0.1:5000", "-vv"])).unwrap();
        assert_eq!(config.log_filter(), "trace");
    }
}
