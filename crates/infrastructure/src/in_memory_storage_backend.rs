use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tollgate_application::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest,
    ResolvedLoginRequest, StorageBackend, StorageKind,
};
use tollgate_core::AppResult;
use tollgate_domain::{
    LoginAttempt, LoginAttemptId, LoginRequest, LoginRequestId, Resolution,
};


#[derive(Debug)]
struct InMemoryState {
    requests: Vec<LoginRequest>,
    attempts: Vec<LoginAttempt>,
    next_request_id: i64,
    next_attempt_id: i64,
}

impl InMemoryState {
    fn store_attempt(&mut self, attempt: NewLoginAttempt) -> LoginAttempt {
        let id = LoginAttemptId::new(self.next_attempt_id);
        self.next_attempt_id += 1;

        let stored = LoginAttempt::new(
            id,
            attempt.username,
            attempt.ip_address,
            attempt.status,
            attempt.created_at,
        );
        self.attempts.push(stored.clone());
        stored
    }

    fn resolve_request(
        &mut self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> Option<LoginRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id() == id)?;
        request.resolve(resolution, Utc::now());
        Some(request.clone())
    }
}

/// Process-local fallback storage.
///
/// Each instance owns its id sequences, both starting at 1. Nothing is shared
/// with other instances or survives a restart.
#[derive(Debug)]
pub struct InMemoryStorageBackend {
    state: RwLock<InMemoryState>,
}

impl InMemoryStorageBackend {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(InMemoryState {
                requests: Vec::new(),
                attempts: Vec::new(),
                next_request_id: 1,
                next_attempt_id: 1,
            }),
        }
    }
}

impl Default for InMemoryStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorageBackend {
    fn kind(&self) -> StorageKind {
        StorageKind::InMemory
    }

    async fn insert_login_request(&self, request: NewLoginRequest) -> AppResult<LoginRequest> {
        let mut state = self.state.write().await;
        let id = LoginRequestId::new(state.next_request_id);
        state.next_request_id += 1;

        let stored = LoginRequest::pending(
            id,
            request.username,
            request.password,
            request.ip_address,
            Utc::now(),
        );
        state.requests.push(stored.clone());

        Ok(stored)
    }

    async fn list_login_requests(
        &self,
        filter: LoginRequestFilter,
    ) -> AppResult<Vec<LoginRequest>> {
        let state = self.state.read().await;
        let mut listed: Vec<LoginRequest> = state
            .requests
            .iter()
            .filter(|request| filter.matches(request))
            .cloned()
            .collect();
        listed.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.id().cmp(&left.id()))
        });

        Ok(listed)
    }

    async fn find_login_request(&self, id: LoginRequestId) -> AppResult<Option<LoginRequest>> {
        Ok(self
            .state
            .read()
            .await
            .requests
            .iter()
            .find(|request| request.id() == id)
            .cloned())
    }

    async fn update_login_request_status(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<LoginRequest>> {
        Ok(self.state.write().await.resolve_request(id, resolution))
    }

    async fn append_login_attempt(&self, attempt: NewLoginAttempt) -> AppResult<LoginAttempt> {
        Ok(self.state.write().await.store_attempt(attempt))
    }

    async fn list_login_attempts(&self, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>> {
        let state = self.state.read().await;

        Ok(state
            .attempts
            .iter()
            .rev()
            .filter(|attempt| {
                query
                    .username
                    .as_deref()
                    .is_none_or(|username| attempt.username() == username)
            })
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn resolve_login_request(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<ResolvedLoginRequest>> {
        let mut state = self.state.write().await;
        let Some(request) = state.resolve_request(id, resolution) else {
            return Ok(None);
        };

        let attempt =
            state.store_attempt(NewLoginAttempt::for_resolved_request(&request, resolution));

        Ok(Some(ResolvedLoginRequest { request, attempt }))
    }
}
