use chrono::{DateTime, SecondsFormat, Utc};
use tollgate_application::LoginRequestStats;
use tollgate_domain::{LoginAttempt, LoginRequest};

use super::types::{
    LoginAttemptResponse, LoginRequestResponse, LoginRequestStatusResponse, LoginStatsResponse,
};

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<LoginRequest> for LoginRequestResponse {
    fn from(value: LoginRequest) -> Self {
        Self {
            id: value.id().as_i64(),
            username: value.username().to_owned(),
            password: value.password().to_owned(),
            ip_address: value.ip_address().to_owned(),
            status: value.status().as_str().to_owned(),
            created_at: timestamp(value.created_at()),
            updated_at: timestamp(value.updated_at()),
        }
    }
}

impl From<LoginRequest> for LoginRequestStatusResponse {
    fn from(value: LoginRequest) -> Self {
        Self {
            id: value.id().as_i64(),
            status: value.status().as_str().to_owned(),
            updated_at: timestamp(value.updated_at()),
        }
    }
}

impl From<LoginAttempt> for LoginAttemptResponse {
    fn from(value: LoginAttempt) -> Self {
        Self {
            id: value.id().as_i64(),
            username: value.username().to_owned(),
            ip_address: value.ip_address().to_owned(),
            status: value.status().as_str().to_owned(),
            created_at: timestamp(value.created_at()),
        }
    }
}

impl From<LoginRequestStats> for LoginStatsResponse {
    fn from(value: LoginRequestStats) -> Self {
        Self {
            total: value.total,
            approved: value.approved,
            rejected: value.rejected,
            pending: value.pending,
            today: value.today,
        }
    }
}
