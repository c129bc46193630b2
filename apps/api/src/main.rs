//! Tollgate API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use tollgate_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::api_router::build_router;
use crate::api_services::{build_app_state, connect_and_migrate, select_storage_backend};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    if let Some(database_url) = config.migration_database_url() {
        connect_and_migrate(database_url, config.database_max_connections).await?;
        info!("database migrations applied");
        return Ok(());
    }

    let storage = select_storage_backend(&config).await?;
    let storage_kind = storage.kind();
    let app = build_router(build_app_state(storage), config.frontend_url.as_deref())?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind API listener: {error}")))?;

    info!(%address, storage = storage_kind.as_str(), "tollgate api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server failed: {error}")))
}
