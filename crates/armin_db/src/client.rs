//! Database client for the Armin Shopfitting API
//!
//! This module provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library.

use crate::error::DbError;
use armin_config::{AppConfig, DatabaseConfig};
use sqlx::any::AnyConnectOptions;
use sqlx::pool::PoolOptions;
use sqlx::Pool;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Database client
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: Pool<sqlx::Any>,
    backend: DbBackend,
}

/// The database engine behind a connection URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    Sqlite,
    Postgres,
    MySql,
}

impl DbBackend {
    /// Detect the backend from the URL scheme
    pub fn from_url(db_url: &str) -> Result<Self, DbError> {
        match db_url.split(':').next().unwrap_or_default() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            other => Err(DbError::UrlError(format!(
                "Unsupported database scheme: {}",
                other
            ))),
        }
    }
}

impl DbClient {
    /// Create a new database client from the `database` section of the
    /// application configuration.
    ///
    /// # Errors
    ///
    /// Fails when the section is missing, the URL is empty, or the
    /// connection cannot be established.
    pub async fn new(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        Self::from_config(db_config).await
    }

    /// Create a new database client from a database configuration
    ///
    /// The configured database name is resolved into the URL with
    /// [`DatabaseConfig::connection_url`].
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        if db_config.url.is_empty() {
            return Err(DbError::ConfigError("Database URL is empty".to_string()));
        }

        Self::from_url(&db_config.connection_url()).await
    }

    /// Create a new database client from a database URL
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("Database URL is empty".to_string()));
        }

        let backend = DbBackend::from_url(db_url)?;
        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool, backend })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("Creating database pool with URL: {}", db_url);

        sqlx::any::install_default_drivers();

        let in_memory = is_sqlite_memory(db_url);
        let pool_options = if in_memory {
            // Every SQLite connection to :memory: opens its own database, so
            // the pool must hold exactly one connection and never recycle it.
            PoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .acquire_timeout(Duration::from_secs(3))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            PoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(3))
                .idle_timeout(Duration::from_secs(600))
        };

        if let Some(db_path) = sqlite_file_path(db_url) {
            ensure_sqlite_file(db_path)?;
        }

        let options = AnyConnectOptions::from_str(db_url)
            .map_err(|e| DbError::UrlError(format!("Invalid database URL: {}", e)))?;

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            error!("Failed to create database pool: {}", e);
            DbError::PoolError(e.to_string())
        })?;

        info!(in_memory, "Database pool created successfully");
        Ok(pool)
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// The database engine this client talks to
    pub fn backend(&self) -> DbBackend {
        self.backend
    }

    /// Execute a statement that returns no rows
    ///
    /// # Returns
    ///
    /// The number of rows affected
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient")
    }
}

fn is_sqlite_memory(db_url: &str) -> bool {
    db_url.starts_with("sqlite:") && db_url.contains(":memory:")
}

/// File path of a SQLite URL, for both `sqlite:app.db` and `sqlite://app.db`.
/// `None` for other backends and in-memory databases.
fn sqlite_file_path(db_url: &str) -> Option<&str> {
    if is_sqlite_memory(db_url) {
        return None;
    }
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then_some(path)
}

/// SQLite won't create a missing database file through the Any driver.
fn ensure_sqlite_file(db_path: &str) -> Result<(), DbError> {
    let path = Path::new(db_path);
    if path.exists() {
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            debug!("Creating directory for SQLite database: {:?}", dir);
            std::fs::create_dir_all(dir).map_err(|e| {
                error!("Failed to create directory for SQLite database: {}", e);
                DbError::PoolError(format!("Failed to create directory: {}", e))
            })?;
        }
    }

    debug!("Creating empty SQLite database file: {}", db_path);
    std::fs::File::create(path).map_err(|e| {
        error!("Failed to create SQLite database file: {}", e);
        DbError::PoolError(format!("Failed to create database file: {}", e))
    })?;
    Ok(())
}
