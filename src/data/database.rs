use crate::api::config::{Config, ConfigError};
use diesel::result;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use once_cell::sync::Lazy;
use thiserror::Error;

pub type DbConnection = Object<AsyncMysqlConnection>;

#[derive(Debug, Clone, Error)]
pub enum DatabaseError {
    #[error("database is not configured: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build connection pool: {0}")]
    PoolBuild(String),
    #[error("failed to get a pooled connection: {0}")]
    Pool(String),
}

pub struct Database {
    pool: &'static Pool<AsyncMysqlConnection>,
}

impl Database {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DB_POOL.as_ref().map_err(Clone::clone)?;
        Ok(Database { pool })
    }

    pub async fn get_connection(&self) -> Result<DbConnection, DatabaseError> {
        self.pool
            .get()
            .await
            .map_err(|e| DatabaseError::Pool(e.to_string()))
    }
}

/// Checks out a pooled connection, folding pool failures into a diesel error
/// so repositories can keep a single error type.
pub async fn connect() -> Result<DbConnection, result::Error> {
    let db = Database::new().await.map_err(into_diesel_error)?;
    db.get_connection().await.map_err(into_diesel_error)
}

fn into_diesel_error(e: DatabaseError) -> result::Error {
    result::Error::DatabaseError(
        result::DatabaseErrorKind::UnableToSendCommand,
        Box::new(e.to_string()),
    )
}

/// Lazily initialized global database connection pool
static DB_POOL: Lazy<Result<Pool<AsyncMysqlConnection>, DatabaseError>> = Lazy::new(|| {
    let config = Config::get()?;

    let manager =
        AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(config.database_url.as_str());
    let pool = Pool::builder(manager)
        .build()
        .map_err(|e| DatabaseError::PoolBuild(e.to_string()))?;

    tracing::info!("DB connection pool created");

    Ok(pool)
});
