use async_trait::async_trait;
use tollgate_core::AppResult;
use tollgate_domain::{LoginAttempt, LoginRequest, LoginRequestId, Resolution};

use super::inputs::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest,
    ResolvedLoginRequest,
};

/// Storage implementation kind, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Durable PostgreSQL storage.
    Postgres,
    /// Process-local fallback storage.
    InMemory,
}

impl StorageKind {
    /// Returns a stable label for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::InMemory => "in_memory",
        }
    }
}

/// Persistence port for login requests and their attempt log.
///
/// Implementations assign identifiers and timestamps. Listings are ordered
/// newest first (`created_at` descending, ties broken by id descending).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Reports which implementation is active.
    fn kind(&self) -> StorageKind;

    /// Stores a new pending request.
    async fn insert_login_request(&self, request: NewLoginRequest) -> AppResult<LoginRequest>;

    /// Lists requests matching the filter, newest first.
    async fn list_login_requests(
        &self,
        filter: LoginRequestFilter,
    ) -> AppResult<Vec<LoginRequest>>;

    /// Returns one request by identifier.
    async fn find_login_request(&self, id: LoginRequestId) -> AppResult<Option<LoginRequest>>;

    /// Moves a request to a terminal status and stamps `updated_at`.
    ///
    /// Returns `None` when the request does not exist.
    async fn update_login_request_status(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<LoginRequest>>;

    /// Appends one audit record.
    async fn append_login_attempt(&self, attempt: NewLoginAttempt) -> AppResult<LoginAttempt>;

    /// Lists audit records newest first.
    async fn list_login_attempts(&self, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>>;

    /// Resolves a request and appends its audit record.
    ///
    /// The provided implementation runs two independent steps; a failure
    /// between them leaves a resolved request without an attempt record.
    /// Backends that can do better override it.
    async fn resolve_login_request(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<ResolvedLoginRequest>> {
        let Some(request) = self.update_login_request_status(id, resolution).await? else {
            return Ok(None);
        };

        let attempt = self
            .append_login_attempt(NewLoginAttempt::for_resolved_request(&request, resolution))
            .await?;

        Ok(Some(ResolvedLoginRequest { request, attempt }))
    }

    /// Checks that the backend is reachable.
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
