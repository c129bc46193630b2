use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Resolution;

/// Identifier of an audit record; independent from login request ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginAttemptId(i64);

impl LoginAttemptId {
    /// Creates an identifier from a stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LoginAttemptId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Write-once audit record produced by each resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    id: LoginAttemptId,
    username: String,
    ip_address: String,
    status: Resolution,
    created_at: DateTime<Utc>,
}

impl LoginAttempt {
    /// Creates an attempt record from stored values.
    #[must_use]
    pub fn new(
        id: LoginAttemptId,
        username: impl Into<String>,
        ip_address: impl Into<String>,
        status: Resolution,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            ip_address: ip_address.into(),
            status,
            created_at,
        }
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> LoginAttemptId {
        self.id
    }

    /// Returns the username of the resolved request.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the IP address of the resolved request.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        self.ip_address.as_str()
    }

    /// Returns the outcome recorded.
    #[must_use]
    pub fn status(&self) -> Resolution {
        self.status
    }

    /// Returns the resolution timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
