//! Application state

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Service configuration
    pub config: Config,
}

impl AppState {
    /// Create a new AppState: open the pool and run pending migrations.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;

        Ok(Self {
            pool,
            config: config.clone(),
        })
    }
}
