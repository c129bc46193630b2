use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use tollgate_application::{LoginAttemptQuery, NewLoginAttempt};
use tollgate_core::{AppError, AppResult};
use tollgate_domain::{LoginAttempt, LoginAttemptId, Resolution};

#[derive(Debug, FromRow)]
struct LoginAttemptRow {
    id: i64,
    username: String,
    ip_address: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl LoginAttemptRow {
    fn into_domain(self) -> AppResult<LoginAttempt> {
        let status = self.status.parse::<Resolution>().map_err(|error| {
            AppError::Internal(format!(
                "login attempt '{}' has an invalid stored status: {error}",
                self.id
            ))
        })?;

        Ok(LoginAttempt::new(
            LoginAttemptId::new(self.id),
            self.username,
            self.ip_address,
            status,
            self.created_at,
        ))
    }
}

pub(super) async fn insert<'e, E>(executor: E, attempt: NewLoginAttempt) -> AppResult<LoginAttempt>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, LoginAttemptRow>(
        r#"
        INSERT INTO login_attempts (username, ip_address, status, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, ip_address, status, created_at
        "#,
    )
    .bind(attempt.username)
    .bind(attempt.ip_address)
    .bind(attempt.status.as_str())
    .bind(attempt.created_at)
    .fetch_one(executor)
    .await
    .map_err(|error| AppError::Internal(format!("failed to append login attempt: {error}")))?
    .into_domain()
}

pub(super) async fn list<'e, E>(executor: E, query: LoginAttemptQuery) -> AppResult<Vec<LoginAttempt>>
where
    E: PgExecutor<'e>,
{
    let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
    let rows = sqlx::query_as::<_, LoginAttemptRow>(
        r#"
        SELECT id, username, ip_address, status, created_at
        FROM login_attempts
        WHERE ($1::TEXT IS NULL OR username = $1)
        ORDER BY created_at DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(query.username)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(|error| AppError::Internal(format!("failed to list login attempts: {error}")))?;

    rows.into_iter().map(LoginAttemptRow::into_domain).collect()
}
