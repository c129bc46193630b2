use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming credential submission.
#[derive(Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/submit-login-request.ts"
)]
pub struct SubmitLoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default, alias = "ipAddress")]
    #[ts(optional)]
    pub ip_address: Option<String>,
}

impl std::fmt::Debug for SubmitLoginRequest {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SubmitLoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ip_address", &self.ip_address)
            .finish()
    }
}

/// API representation of a login request.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request-response.ts"
)]
pub struct LoginRequestResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub username: String,
    pub password: String,
    pub ip_address: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Lightweight status view used by pollers.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request-status-response.ts"
)]
pub struct LoginRequestStatusResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub status: String,
    pub updated_at: String,
}

/// API representation of an attempt log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-attempt-response.ts"
)]
pub struct LoginAttemptResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub username: String,
    pub ip_address: String,
    pub status: String,
    pub created_at: String,
}

/// Aggregate request counts.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-stats-response.ts"
)]
pub struct LoginStatsResponse {
    #[ts(type = "number")]
    pub total: u64,
    #[ts(type = "number")]
    pub approved: u64,
    #[ts(type = "number")]
    pub rejected: u64,
    #[ts(type = "number")]
    pub pending: u64,
    #[ts(type = "number")]
    pub today: u64,
}

/// Query parameters for request listings.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequestListQuery {
    pub status: Option<String>,
}

/// Query parameters for attempt log listings.
#[derive(Debug, Default, Deserialize)]
pub struct LoginAttemptListQuery {
    pub username: Option<String>,
    pub limit: Option<usize>,
}
