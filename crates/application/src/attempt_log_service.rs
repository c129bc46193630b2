use std::sync::Arc;

use tollgate_core::AppResult;
use tollgate_domain::LoginAttempt;

use crate::storage_ports::{LoginAttemptQuery, StorageBackend};

/// Default page size for attempt log listings.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 100;

/// Largest page size accepted for attempt log listings.
pub const MAX_ATTEMPT_LIMIT: usize = 500;

/// Read access to the append-only attempt log.
///
/// Records are written only by [`crate::LifecycleService`] through the
/// storage backend.
#[derive(Clone)]
pub struct AttemptLogService {
    storage: Arc<dyn StorageBackend>,
}

impl AttemptLogService {
    /// Creates a service from a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Lists attempt records newest first.
    pub async fn list_attempts(&self, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>> {
        let username = query
            .username
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        self.storage
            .list_login_attempts(LoginAttemptQuery {
                username,
                limit: query.limit.clamp(1, MAX_ATTEMPT_LIMIT),
            })
            .await
    }

    /// Lists attempt records for one username, newest first.
    pub async fn list_for_username(&self, username: &str) -> AppResult<Vec<LoginAttempt>> {
        self.list_attempts(LoginAttemptQuery {
            username: Some(username.to_owned()),
            limit: DEFAULT_ATTEMPT_LIMIT,
        })
        .await
    }
}
