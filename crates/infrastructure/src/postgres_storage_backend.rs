use async_trait::async_trait;
use sqlx::PgPool;
use tollgate_application::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest,
    ResolvedLoginRequest, StorageBackend, StorageKind,
};
use tollgate_core::{AppError, AppResult};
use tollgate_domain::{LoginAttempt, LoginRequest, LoginRequestId, Resolution};
use tracing::debug;

mod attempts;
mod requests;


/// PostgreSQL-backed storage for login requests and the attempt log.
#[derive(Clone)]
pub struct PostgresStorageBackend {
    pool: PgPool,
}

impl PostgresStorageBackend {
    /// Creates a backend with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageBackend for PostgresStorageBackend {
    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }

    async fn insert_login_request(&self, request: NewLoginRequest) -> AppResult<LoginRequest> {
        requests::insert(&self.pool, request).await
    }

    async fn list_login_requests(
        &self,
        filter: LoginRequestFilter,
    ) -> AppResult<Vec<LoginRequest>> {
        requests::list(&self.pool, filter).await
    }

    async fn find_login_request(&self, id: LoginRequestId) -> AppResult<Option<LoginRequest>> {
        requests::find(&self.pool, id).await
    }

    async fn update_login_request_status(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<LoginRequest>> {
        requests::update_status(&self.pool, id, resolution).await
    }

    async fn append_login_attempt(&self, attempt: NewLoginAttempt) -> AppResult<LoginAttempt> {
        attempts::insert(&self.pool, attempt).await
    }

    async fn list_login_attempts(&self, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>> {
        attempts::list(&self.pool, query).await
    }

    async fn resolve_login_request(
        &self,
        id: LoginRequestId,
        resolution: Resolution,
    ) -> AppResult<Option<ResolvedLoginRequest>> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to start login request resolution transaction: {error}"
            ))
        })?;

        let Some(request) = requests::update_status(&mut *transaction, id, resolution).await?
        else {
            return Ok(None);
        };

        let attempt = attempts::insert(
            &mut *transaction,
            NewLoginAttempt::for_resolved_request(&request, resolution),
        )
        .await?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to commit login request resolution for '{id}': {error}"
            ))
        })?;

        debug!(
            request_id = %id,
            attempt_id = %attempt.id(),
            status = resolution.as_str(),
            "login request resolution committed"
        );

        Ok(Some(ResolvedLoginRequest { request, attempt }))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("postgres check failed: {error}")))?;

        Ok(())
    }
}
