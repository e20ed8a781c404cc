//! Database connection pool supporting SQLite and MySQL.
//!
//! SQLite connections are lightweight and file-based, so they are created
//! on demand through diesel-async's SyncConnectionWrapper. The MySQL
//! backend (feature `mysql`) uses a real deadpool-managed pool.

use std::path::Path;

use diesel::sqlite::SqliteConnection;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::AsyncConnection;

#[cfg(feature = "mysql")]
use diesel_async::pooled_connection::deadpool::Pool as DeadPool;
#[cfg(feature = "mysql")]
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
#[cfg(feature = "mysql")]
use diesel_async::AsyncMysqlConnection;

use super::util::{is_mysql_url, to_diesel_error};

/// Diesel error type alias.
pub type DbError = diesel::result::Error;

/// Async SQLite connection type.
pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

/// Async MySQL connection type.
#[cfg(feature = "mysql")]
pub type MysqlConn = deadpool::managed::Object<AsyncDieselConnectionManager<AsyncMysqlConnection>>;

/// SQLite connection pool (lightweight - creates connections on demand).
#[derive(Clone)]
pub struct SqlitePool {
    database_url: String,
}

impl SqlitePool {
    /// Create a new SQLite pool.
    pub fn new(database_url: &str) -> Self {
        // Strip sqlite: prefix if present
        let url = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
        Self {
            database_url: url.to_string(),
        }
    }

    /// Create pool from a file path.
    pub fn from_path(path: &Path) -> Self {
        Self::new(&path.display().to_string())
    }

    /// Get a connection.
    pub async fn get(&self) -> Result<SqliteConn, DbError> {
        SqliteConn::establish(&self.database_url)
            .await
            .map_err(to_diesel_error)
    }

    /// Get the database URL.
    #[allow(dead_code)]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// MySQL connection pool.
#[cfg(feature = "mysql")]
#[derive(Clone)]
pub struct MysqlPool {
    pool: DeadPool<AsyncMysqlConnection>,
}

#[cfg(feature = "mysql")]
impl MysqlPool {
    /// Create a new MySQL pool.
    pub fn new(database_url: &str, max_size: usize) -> Result<Self, DbError> {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = DeadPool::builder(config)
            .max_size(max_size)
            .build()
            .map_err(to_diesel_error)?;
        Ok(Self { pool })
    }

    /// Get a connection.
    pub async fn get(&self) -> Result<MysqlConn, DbError> {
        self.pool.get().await.map_err(to_diesel_error)
    }
}

/// Database pool that dispatches between the supported backends.
#[derive(Clone)]
pub enum DbPool {
    Sqlite(SqlitePool),
    #[cfg(feature = "mysql")]
    Mysql(MysqlPool),
}

impl DbPool {
    /// Create a pool from a database URL.
    ///
    /// Detects the backend from the URL:
    /// - `mysql://` → MySQL (requires the `mysql` feature)
    /// - Everything else → SQLite
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        #[cfg(feature = "mysql")]
        if is_mysql_url(url) {
            return Ok(DbPool::Mysql(MysqlPool::new(url, 10)?));
        }

        #[cfg(not(feature = "mysql"))]
        if is_mysql_url(url) {
            return Err(to_diesel_error(
                "mysql:// URL given but idscan was built without the mysql feature",
            ));
        }

        Ok(DbPool::Sqlite(SqlitePool::new(url)))
    }

    /// Create a SQLite pool from a file path.
    pub fn sqlite_from_path(path: &Path) -> Self {
        DbPool::Sqlite(SqlitePool::from_path(path))
    }

    /// Check if this is a SQLite backend.
    #[allow(dead_code)]
    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbPool::Sqlite(_))
    }
}

/// Macro for running database operations on either backend.
///
/// Handles the connection dispatch so the same Diesel DSL code runs on
/// both SQLite and MySQL.
///
/// # Example
/// ```ignore
/// with_conn!(self.pool, conn => {
///     identity_cards::table.load::<CardRecord>(&mut conn).await
/// })
/// ```
#[macro_export]
macro_rules! with_conn {
    ($pool:expr, $conn:ident => $body:expr) => {{
        match &$pool {
            $crate::repository::pool::DbPool::Sqlite(pool) => {
                let mut $conn = pool.get().await?;
                $body
            }
            #[cfg(feature = "mysql")]
            $crate::repository::pool::DbPool::Mysql(pool) => {
                let mut $conn = pool.get().await?;
                $body
            }
        }
    }};
}

/// Macro for running database operations that need different SQL per backend.
///
/// Use this when the SQL syntax differs between SQLite and MySQL
/// (schema DDL, mostly).
#[macro_export]
macro_rules! with_conn_split {
    ($pool:expr, sqlite: $sqlite_conn:ident => $sqlite_body:expr, mysql: $mysql_conn:ident => $mysql_body:expr) => {{
        match &$pool {
            $crate::repository::pool::DbPool::Sqlite(pool) => {
                let mut $sqlite_conn = pool.get().await?;
                $sqlite_body
            }
            #[cfg(feature = "mysql")]
            $crate::repository::pool::DbPool::Mysql(pool) => {
                let mut $mysql_conn = pool.get().await?;
                $mysql_body
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_detection() {
        // SQLite paths
        assert!(DbPool::from_url("/path/to/db.sqlite").unwrap().is_sqlite());
        assert!(DbPool::from_url("sqlite:/path/to/db").unwrap().is_sqlite());

        // MySQL URLs only work with the feature enabled
        #[cfg(feature = "mysql")]
        assert!(!DbPool::from_url("mysql://root@localhost/identity_card_db")
            .unwrap()
            .is_sqlite());
        #[cfg(not(feature = "mysql"))]
        assert!(DbPool::from_url("mysql://root@localhost/identity_card_db").is_err());
    }
}
