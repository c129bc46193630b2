//! Resolution of login requests.
//!
//! `pending` moves to `approved` or `rejected`. Resolving a request that is
//! already terminal is allowed: the status and `updated_at` are overwritten
//! and a further attempt record is appended.

use std::sync::Arc;

use tollgate_core::AppResult;
use tollgate_domain::{LoginRequest, LoginRequestId, Resolution};
use tracing::{info, warn};

use crate::login_request_service::login_request_not_found;
use crate::storage_ports::StorageBackend;

#[cfg(test)]
mod tests;

/// Application service applying operator decisions.
#[derive(Clone)]
pub struct LifecycleService {
    storage: Arc<dyn StorageBackend>,
}

impl LifecycleService {
    /// Creates a service from a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Approves one request.
    pub async fn approve(&self, id: LoginRequestId) -> AppResult<LoginRequest> {
        self.resolve(id, Resolution::Approved).await
    }

    /// Rejects one request.
    pub async fn reject(&self, id: LoginRequestId) -> AppResult<LoginRequest> {
        self.resolve(id, Resolution::Rejected).await
    }

    /// Moves a request to a terminal status and appends its attempt record.
    ///
    /// Returns the updated request, not the attempt.
    pub async fn resolve(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<LoginRequest> {
        let current = self
            .storage
            .find_login_request(id)
            .await?
            .ok_or_else(|| login_request_not_found(id))?;

        if !current.is_pending() {
            warn!(
                request_id = %id,
                previous_status = %current.status(),
                status = %resolution,
                "re-resolving a login request that was already resolved"
            );
        }

        let resolved = self
            .storage
            .resolve_login_request(id, resolution)
            .await?
            .ok_or_else(|| login_request_not_found(id))?;

        info!(
            request_id = %id,
            attempt_id = %resolved.attempt.id(),
            username = resolved.request.username(),
            status = %resolution,
            "login request resolved"
        );

        Ok(resolved.request)
    }
}
