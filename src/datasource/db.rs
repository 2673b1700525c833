use crate::models::product_dao::create_products_table;
use crate::models::user_dao::create_users_table;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub const DATABASE_KIND: &str = "SQLite";

/// Builds a lazy pool: nothing touches the database until the first query,
/// so an unreachable database never blocks startup.
pub fn init_pool(url: &str) -> Result<SqlitePool, sqlx::Error> {
    info!("Using database: {}", url);
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    Ok(SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options))
}

// Every backend the service can run against needs these two operations
pub trait Database {
    /// `Ok(false)` means the database could not be reached; `Err` is reserved
    /// for failures that are not about connectivity.
    async fn test_connection(&self) -> Result<bool, sqlx::Error>;
    async fn init_db(&self) -> Result<(), sqlx::Error>;
}

impl Database for SqlitePool {
    async fn test_connection(&self) -> Result<bool, sqlx::Error> {
        match sqlx::query("SELECT 1").execute(self).await {
            Ok(_) => Ok(true),
            Err(e) if is_connection_error(&e) => {
                warn!("database unreachable: {}", e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn init_db(&self) -> Result<(), sqlx::Error> {
        create_products_table(self).await?;
        create_users_table(self).await?;
        Ok(())
    }
}

fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Database(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
    )
}

/// Single-connection in-memory pool; every connection to `sqlite::memory:`
/// opens its own database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::product_dao::Product;

    #[tokio::test]
    async fn test_connection_ok() {
        let pool = test_pool().await;
        assert!(pool.test_connection().await.unwrap());
    }

    #[tokio::test]
    async fn test_connection_closed_pool_is_disconnected() {
        let pool = test_pool().await;
        pool.close().await;
        assert!(!pool.test_connection().await.unwrap());
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let pool = test_pool().await;
        pool.init_db().await.unwrap();
        pool.init_db().await.unwrap();
        assert_eq!(Product::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_init_pool_is_lazy() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/store.db", dir.path().display());

        let pool = init_pool(&url).unwrap();
        assert!(!dir.path().join("store.db").exists());

        assert!(pool.test_connection().await.unwrap());
        assert!(dir.path().join("store.db").exists());
    }

    #[test]
    fn test_init_pool_rejects_bad_option() {
        assert!(init_pool("sqlite://store.db?mode=bogus").is_err());
    }
}
