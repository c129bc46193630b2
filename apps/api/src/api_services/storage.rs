use std::sync::Arc;

use tollgate_application::StorageBackend;
use tollgate_core::AppError;
use tollgate_infrastructure::{InMemoryStorageBackend, PostgresStorageBackend};
use tracing::{info, warn};

use crate::api_config::ApiConfig;

use super::database::connect_and_migrate;

/// Picks the storage backend for the lifetime of the process.
///
/// Postgres is used when `DATABASE_URL` is set and reachable. Otherwise the
/// in-memory backend is used, unless fallback is disabled and a configured
/// database could not be reached.
pub async fn select_storage_backend(
    config: &ApiConfig,
) -> Result<Arc<dyn StorageBackend>, AppError> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL is not set; login requests are kept in memory and lost on restart");
        return Ok(Arc::new(InMemoryStorageBackend::new()));
    };

    match connect_and_migrate(database_url, config.database_max_connections).await {
        Ok(pool) => {
            info!("using postgres storage backend");
            Ok(Arc::new(PostgresStorageBackend::new(pool)))
        }
        Err(error) if config.storage_fallback => {
            warn!(
                error = %error,
                "postgres storage unavailable; falling back to in-memory storage"
            );
            Ok(Arc::new(InMemoryStorageBackend::new()))
        }
        Err(error) => Err(error),
    }
}
