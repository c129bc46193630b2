use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tollgate_core::{AppError, AppResult};
use tollgate_domain::{
    LoginAttempt, LoginAttemptId, LoginRequest, LoginRequestId, Resolution,
};

use crate::storage_ports::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest, StorageBackend,
    StorageKind,
};

struct FakeState {
    requests: Vec<LoginRequest>,
    attempts: Vec<LoginAttempt>,
    clock: DateTime<Utc>,
}

/// Storage fake with a clock that advances one second per write.
pub(crate) struct FakeStorageBackend {
    state: Mutex<FakeState>,
    fail_everything: bool,
    fail_attempt_appends: bool,
}

impl FakeStorageBackend {
    pub(crate) fn new() -> Self {
        Self::starting_at(
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
                .single()
                .unwrap_or_else(|| unreachable!()),
        )
    }

    pub(crate) fn starting_at(clock: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                requests: Vec::new(),
                attempts: Vec::new(),
                clock,
            }),
            fail_everything: false,
            fail_attempt_appends: false,
        }
    }

    pub(crate) fn unreachable_backend() -> Self {
        Self {
            fail_everything: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_attempt_appends() -> Self {
        Self {
            fail_attempt_appends: true,
            ..Self::new()
        }
    }

    pub(crate) fn set_clock(&self, clock: DateTime<Utc>) -> AppResult<()> {
        self.lock()?.clock = clock;
        Ok(())
    }

    pub(crate) fn attempt_count(&self) -> usize {
        self.lock().map(|state| state.attempts.len()).unwrap_or(0)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, FakeState>> {
        if self.fail_everything {
            return Err(AppError::Internal("connection refused".to_owned()));
        }

        self.state
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock fake storage: {error}")))
    }
}

impl FakeState {
    fn tick(&mut self) -> DateTime<Utc> {
        let now = self.clock;
        self.clock += TimeDelta::seconds(1);
        now
    }
}

#[async_trait]
impl StorageBackend for FakeStorageBackend {
    fn kind(&self) -> StorageKind {
        StorageKind::InMemory
    }

    async fn insert_login_request(&self, request: NewLoginRequest) -> AppResult<LoginRequest> {
        let mut state = self.lock()?;
        let id = LoginRequestId::new(i64::try_from(state.requests.len()).unwrap_or(0) + 1);
        let created_at = state.tick();
        let stored = LoginRequest::pending(
            id,
            request.username,
            request.password,
            request.ip_address,
            created_at,
        );
        state.requests.push(stored.clone());
        Ok(stored)
    }

    async fn list_login_requests(
        &self,
        filter: LoginRequestFilter,
    ) -> AppResult<Vec<LoginRequest>> {
        let state = self.lock()?;
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
            .lock()?
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
        let mut state = self.lock()?;
        let now = state.tick();
        let Some(request) = state.requests.iter_mut().find(|request| request.id() == id) else {
            return Ok(None);
        };
        request.resolve(resolution, now);
        Ok(Some(request.clone()))
    }

    async fn append_login_attempt(&self, attempt: NewLoginAttempt) -> AppResult<LoginAttempt> {
        if self.fail_attempt_appends {
            return Err(AppError::Internal("attempt log unavailable".to_owned()));
        }

        let mut state = self.lock()?;
        let id = LoginAttemptId::new(i64::try_from(state.attempts.len()).unwrap_or(0) + 1);
        let stored = LoginAttempt::new(
            id,
            attempt.username,
            attempt.ip_address,
            attempt.status,
            attempt.created_at,
        );
        state.attempts.push(stored.clone());
        Ok(stored)
    }

    async fn list_login_attempts(&self, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>> {
        let state = self.lock()?;
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
}
