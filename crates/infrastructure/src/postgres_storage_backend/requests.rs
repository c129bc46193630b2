use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use tollgate_application::{LoginRequestFilter, NewLoginRequest};
use tollgate_core::{AppError, AppResult};
use tollgate_domain::{LoginRequest, LoginRequestId, LoginRequestStatus, Resolution};

#[derive(Debug, FromRow)]
struct LoginRequestRow {
    id: i64,
    username: String,
    password: String,
    ip_address: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LoginRequestRow {
    fn into_domain(self) -> AppResult<LoginRequest> {
        let status = self.status.parse::<LoginRequestStatus>().map_err(|error| {
            AppError::Internal(format!(
                "login request '{}' has an invalid stored status: {error}",
                self.id
            ))
        })?;

        Ok(LoginRequest::from_stored(
            LoginRequestId::new(self.id),
            self.username,
            self.password,
            self.ip_address,
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub(super) async fn insert<'e, E>(executor: E, request: NewLoginRequest) -> AppResult<LoginRequest>
where
    E: PgExecutor<'e>,
{
    // Both timestamps come from one now() so they are equal on creation.
    sqlx::query_as::<_, LoginRequestRow>(
        r#"
        INSERT INTO login_requests (
            username,
            password,
            ip_address,
            status,
            created_at,
            updated_at
        )
        VALUES ($1, $2, $3, 'pending', now(), now())
        RETURNING id, username, password, ip_address, status, created_at, updated_at
        "#,
    )
    .bind(request.username)
    .bind(request.password)
    .bind(request.ip_address)
    .fetch_one(executor)
    .await
    .map_err(|error| AppError::Internal(format!("failed to insert login request: {error}")))?
    .into_domain()
}

pub(super) async fn list<'e, E>(
    executor: E,
    filter: LoginRequestFilter,
) -> AppResult<Vec<LoginRequest>>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, LoginRequestRow>(
        r#"
        SELECT id, username, password, ip_address, status, created_at, updated_at
        FROM login_requests
        WHERE ($1::TEXT IS NULL OR status = $1)
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(filter.status.map(|status| status.as_str()))
    .fetch_all(executor)
    .await
    .map_err(|error| AppError::Internal(format!("failed to list login requests: {error}")))?;

    rows.into_iter().map(LoginRequestRow::into_domain).collect()
}

pub(super) async fn find<'e, E>(executor: E, id: LoginRequestId) -> AppResult<Option<LoginRequest>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, LoginRequestRow>(
        r#"
        SELECT id, username, password, ip_address, status, created_at, updated_at
        FROM login_requests
        WHERE id = $1
        "#,
    )
    .bind(id.as_i64())
    .fetch_optional(executor)
    .await
    .map_err(|error| {
        AppError::Internal(format!("failed to find login request '{id}': {error}"))
    })?
    .map(LoginRequestRow::into_domain)
    .transpose()
}

pub(super) async fn update_status<'e, E>(
    executor: E,
    id: LoginRequestId,
    resolution: Resolution,
) -> AppResult<Option<LoginRequest>>
where
    E: PgExecutor<'e>,
{
    // updated_at must land strictly after created_at even within one transaction.
    sqlx::query_as::<_, LoginRequestRow>(
        r#"
        UPDATE login_requests
        SET
            status = $2,
            updated_at = GREATEST(clock_timestamp(), created_at + interval '1 microsecond')
        WHERE id = $1
        RETURNING id, username, password, ip_address, status, created_at, updated_at
        "#,
    )
    .bind(id.as_i64())
    .bind(resolution.as_str())
    .fetch_optional(executor)
    .await
    .map_err(|error| {
        AppError::Internal(format!("failed to update login request '{id}': {error}"))
    })?
    .map(LoginRequestRow::into_domain)
    .transpose()
}
