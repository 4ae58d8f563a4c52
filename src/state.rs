use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::{self, StoreError};

/// Shared application state: configuration plus the connection pool. Passed
/// to every handler through axum state; there are no module-level singletons.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub pool: SqlitePool,
}

impl AppContext {
    pub async fn init(config: AppConfig) -> Result<Self, StoreError> {
        let pool = database::connect(&config.database).await?;
        Ok(Self { config: Arc::new(config), pool })
    }
}
